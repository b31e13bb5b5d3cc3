//! Sidebar groups and menu-hidden ids.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::entry::NavigationEntry;
use crate::tree::NavigationTree;

const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    ("council", &["councilPhotos", "councilRTE1963_1986"]),
    (
        "kvArchive",
        &["kvDiplomas", "kvMagRadio1952_1956", "kvRTE1959_1987", "kvActivityTo1999"],
    ),
    (
        "ukvArchive",
        &[
            "ukvDiplomas",
            "ukvRepeaters",
            "ukvRTE1966_1989",
            "ukvTo1992",
            "ukvTo2008",
            "ukvTo2013",
            "ukvTo2015",
            "ukvTo2026",
            "ukvTo2030",
        ],
    ),
    (
        "rzArchive",
        &[
            "rzPhotosDiplomas",
            "rzRadioTV1957_1969",
            "rzRTE1970_2002",
            "rz1996_2012",
            "rz2013_2021",
            "rz2022_2030",
        ],
    ),
    (
        "rsArchive",
        &["rsPhotosDiplomas", "rs1993_2010", "rs2014_2021", "rs2022_2030"],
    ),
    (
        "schemes",
        &["otherSchemesKvUkv", "otherSchemesRz", "otherFactoryDevices", "otherSchemes"],
    ),
];

/// Pages reached through footer links only.
const LEGAL_IDS: &[&str] = &["terms", "legal", "privacy", "cookies", "logoTrademark"];

/// Sidebar group definitions with lookups in both directions.
#[derive(Debug, Clone)]
pub struct SubnavGroups {
    roots: HashMap<String, Vec<String>>,
    member_to_root: HashMap<String, String>,
}

impl Default for SubnavGroups {
    fn default() -> Self {
        Self::from_groups(DEFAULT_GROUPS.iter().map(|(root, members)| {
            (
                (*root).to_owned(),
                members.iter().map(|m| (*m).to_owned()).collect(),
            )
        }))
    }
}

impl SubnavGroups {
    /// Build groups from `(root, members)` pairs.
    ///
    /// A member listed under several roots belongs to the first one.
    pub fn from_groups(groups: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut roots = HashMap::new();
        let mut member_to_root = HashMap::new();
        for (root, members) in groups {
            for member in &members {
                member_to_root
                    .entry(member.clone())
                    .or_insert_with(|| root.clone());
            }
            roots.insert(root, members);
        }
        Self {
            roots,
            member_to_root,
        }
    }

    /// Groups from configuration, or the built-in groups when absent.
    #[must_use]
    pub fn from_config(groups: Option<&BTreeMap<String, Vec<String>>>) -> Self {
        groups.map_or_else(Self::default, |g| {
            Self::from_groups(g.iter().map(|(k, v)| (k.clone(), v.clone())))
        })
    }

    /// Root of the group `id` belongs to: `id` itself when it is a root,
    /// else the root listing it as a member.
    #[must_use]
    pub fn resolve_root<'a>(&'a self, id: &'a str) -> Option<&'a str> {
        if self.roots.contains_key(id) {
            return Some(id);
        }
        self.member_to_root.get(id).map(String::as_str)
    }

    /// Sidebar for `id`, if it belongs to a group with members in `tree`.
    ///
    /// Members missing from the tree are dropped; a group left with no
    /// members yields no sidebar.
    #[must_use]
    pub fn compute(&self, id: &str, tree: &NavigationTree) -> Option<Subnav> {
        let root_id = self.resolve_root(id)?;
        let declared = self.roots.get(root_id)?;

        let members: Vec<NavigationEntry> = declared
            .iter()
            .filter_map(|member| {
                let found = tree.get(member);
                if found.is_none() {
                    tracing::warn!(root = root_id, member = %member, "subnav member not in navigation");
                }
                found.cloned()
            })
            .collect();

        if members.is_empty() {
            return None;
        }

        Some(Subnav {
            root_id: root_id.to_owned(),
            root: tree.get(root_id).cloned(),
            members,
        })
    }
}

/// Resolved sidebar for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subnav {
    pub root_id: String,
    pub root: Option<NavigationEntry>,
    pub members: Vec<NavigationEntry>,
}

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnavLink {
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl Subnav {
    /// Sidebar heading: root title, else the root id.
    #[must_use]
    pub fn title(&self) -> &str {
        self.root
            .as_ref()
            .map_or(self.root_id.as_str(), NavigationEntry::display_title)
    }

    /// Links in display order: root first (when present), then members.
    #[must_use]
    pub fn links(&self, current_id: &str) -> Vec<SubnavLink> {
        self.root
            .iter()
            .chain(&self.members)
            .map(|e| SubnavLink {
                id: e.id.clone(),
                label: e.display_title().to_owned(),
                active: e.id == current_id,
            })
            .collect()
    }
}

/// Ids left out of the primary menu. Routing ignores this set.
#[derive(Debug, Clone)]
pub struct HiddenIds(HashSet<String>);

impl Default for HiddenIds {
    fn default() -> Self {
        let members = DEFAULT_GROUPS.iter().flat_map(|(_, members)| members.iter());
        Self(
            members
                .chain(LEGAL_IDS)
                .map(|id| (*id).to_owned())
                .collect(),
        )
    }
}

impl HiddenIds {
    /// Hidden ids from configuration, or the built-in set when absent.
    #[must_use]
    pub fn from_config(ids: Option<&[String]>) -> Self {
        ids.map_or_else(Self::default, |ids| Self(ids.iter().cloned().collect()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}
