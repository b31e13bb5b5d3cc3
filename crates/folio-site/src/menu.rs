//! Menu title rules and display menu construction.
//!
//! Rules are static data per locale. Each rule pairs a [`TitleMatch`] with
//! a [`MenuAction`]; the first rule whose matcher accepts the normalized
//! title decides what happens to the entry. Entries no rule matches pass
//! through unchanged.

use serde::Serialize;

use crate::entry::NavigationEntry;
use crate::subnav::HiddenIds;
use crate::tree::NavigationTree;
use crate::ui::UiText;

/// Pseudo-route id of the contact page.
pub const CONTACT_ID: &str = "contact";

/// Predicate over a normalized title.
#[derive(Debug, Clone, Copy)]
pub enum TitleMatch {
    Equals(&'static str),
    StartsWith(&'static str),
    Contains(&'static str),
    ContainsAll(&'static [&'static str]),
    AnyOf(&'static [TitleMatch]),
}

impl TitleMatch {
    fn matches(&self, title: &str) -> bool {
        match self {
            TitleMatch::Equals(s) => title == *s,
            TitleMatch::StartsWith(s) => title.starts_with(s),
            TitleMatch::Contains(s) => title.contains(s),
            TitleMatch::ContainsAll(parts) => parts.iter().all(|p| title.contains(p)),
            TitleMatch::AnyOf(matchers) => matchers.iter().any(|m| m.matches(title)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Remove,
    Rename(&'static str),
}

/// Matcher and the action taken when it accepts a title.
pub type MenuRule = (TitleMatch, MenuAction);

/// Rules for one locale family.
///
/// With `case_insensitive`, titles are lower-cased before matching and
/// patterns are written in lower case.
#[derive(Debug)]
pub struct MenuRuleSet {
    pub case_insensitive: bool,
    pub rules: &'static [MenuRule],
}

use MenuAction::{Remove, Rename};
use TitleMatch::{AnyOf, Contains, ContainsAll, Equals, StartsWith};

pub static BG_RULES: MenuRuleSet = MenuRuleSet {
    case_insensitive: false,
    rules: &[
        (Equals("Начало"), Remove),
        (Equals("Управителен съвет - Снимки"), Remove),
        (StartsWith("КВ -"), Rename("КВ")),
        (StartsWith("УКВ -"), Rename("УКВ")),
        (Equals("Радио засичане - Архив"), Rename("Радио Засичане")),
        (Equals("Цифрова група - Снимки"), Rename("Цифрова Група")),
        (Equals("Радио събори - Архив"), Rename("Събори")),
        (Equals("Схеми и документация"), Rename("Други")),
    ],
};

// VHF comes before HF: every "vhf" title also contains "hf".
pub static OTHER_RULES: MenuRuleSet = MenuRuleSet {
    case_insensitive: true,
    rules: &[
        (Equals("home"), Remove),
        (ContainsAll(&["board", "photos"]), Remove),
        (ContainsAll(&["vhf", "archive"]), Rename("VHF")),
        (ContainsAll(&["hf", "archive"]), Rename("HF")),
        (
            AnyOf(&[Contains("fox"), ContainsAll(&["direction", "finding"])]),
            Rename("Radio Direction Finding"),
        ),
        (ContainsAll(&["digital", "photos"]), Rename("Digital Group")),
        (
            AnyOf(&[Contains("rallies"), ContainsAll(&["meet", "archive"])]),
            Rename("Rallies"),
        ),
        (AnyOf(&[Contains("schemes"), Contains("documentation")]), Rename("Other")),
    ],
};

impl MenuRuleSet {
    /// Rules for `locale`: case-sensitive Bulgarian rules for `bg`, the
    /// case-insensitive English rules otherwise.
    #[must_use]
    pub fn for_locale(locale: &str) -> &'static MenuRuleSet {
        if locale == "bg" { &BG_RULES } else { &OTHER_RULES }
    }

    /// Action of the first rule matching `title`, if any.
    #[must_use]
    pub fn action_for(&self, title: &str) -> Option<MenuAction> {
        let normalized = normalize_title(title);
        let subject = if self.case_insensitive {
            normalized.to_lowercase()
        } else {
            normalized
        };
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.matches(&subject))
            .map(|&(_, action)| action)
    }
}

/// Collapse whitespace runs, map en/em dashes to `-`, and trim.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['–', '—'], "-")
        .trim()
        .to_owned()
}

/// Apply the locale's menu rules.
///
/// Removes and renames entries; ids, content kinds and order are untouched.
/// Every returned entry has a non-empty title (`title`, else `id`).
#[must_use]
pub fn apply_menu_rules(entries: &[NavigationEntry], locale: &str) -> Vec<NavigationEntry> {
    let rules = MenuRuleSet::for_locale(locale);
    entries
        .iter()
        .filter_map(|entry| {
            let original = entry.display_title();
            let title = match rules.action_for(original) {
                Some(MenuAction::Remove) => return None,
                Some(MenuAction::Rename(name)) => name.to_owned(),
                None => original.to_owned(),
            };
            Some(NavigationEntry {
                title,
                ..entry.clone()
            })
        })
        .collect()
}

/// One link of the primary menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    pub id: String,
    pub label: String,
    pub is_home: bool,
    pub active: bool,
}

impl MenuLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Primary menu: home link, rule-filtered entries without hidden ids, and
/// the contact link last. `current_id` marks the active link.
#[must_use]
pub fn build_display_menu(
    tree: &NavigationTree,
    locale: &str,
    hidden: &HiddenIds,
    current_id: &str,
) -> Vec<MenuLink> {
    let ui = UiText::for_locale(locale);
    let home = tree.home();
    let link = |id: &str, label: &str, is_home: bool| MenuLink {
        id: id.to_owned(),
        label: label.to_owned(),
        is_home,
        active: id == current_id,
    };

    let mut links = vec![link(&home.id, ui.home_label, true)];
    links.extend(
        apply_menu_rules(tree.entries(), locale)
            .iter()
            .filter(|e| !hidden.contains(&e.id) && e.id != CONTACT_ID)
            .map(|e| link(&e.id, &e.title, false)),
    );
    links.push(link(CONTACT_ID, ui.contact_menu, false));
    links
}
