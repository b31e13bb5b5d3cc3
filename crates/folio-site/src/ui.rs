//! Built-in UI strings for page chrome and panels.

/// Fixed UI text for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub loading: &'static str,
    pub not_found: &'static str,
    pub load_error: &'static str,
    pub contact_load_error: &'static str,
    pub startup_error: &'static str,
    pub contact_title: &'static str,
    pub contact_menu: &'static str,
    pub home_label: &'static str,
    pub news_back: &'static str,
    pub news_read_more: &'static str,
    pub news_empty: &'static str,
    pub archive_label: &'static str,
    pub spam_wait: &'static str,
    pub sent: &'static str,
    pub send_failed: &'static str,
}

pub static BG: UiText = UiText {
    loading: "Зареждане...",
    not_found: "Няма налично съдържание.",
    load_error: "Грешка при зареждане",
    contact_load_error: "Грешка при зареждане на Контакти",
    startup_error: "Грешка при стартиране",
    contact_title: "Контакти",
    contact_menu: "КОНТАКТИ",
    home_label: "Начало",
    news_back: "← Всички новини",
    news_read_more: "Прочети още…",
    news_empty: "Все още няма публикувани новини.",
    archive_label: "Архив",
    spam_wait: "Защита от спам: изчакай секунда и опитай пак.",
    sent: "БЛАГОДАРИМ! СЪОБЩЕНИЕТО БЕШЕ ИЗПРАТЕНО.",
    send_failed: "Грешка: съобщението не беше изпратено. Опитай пак по-късно.",
};

pub static EN: UiText = UiText {
    loading: "Loading...",
    not_found: "No content available.",
    load_error: "Error loading content",
    contact_load_error: "Error loading Contact",
    startup_error: "Startup error",
    contact_title: "Contact",
    contact_menu: "Contact",
    home_label: "Home",
    news_back: "← All news",
    news_read_more: "Read more…",
    news_empty: "No news published yet.",
    archive_label: "Archive",
    spam_wait: "Spam protection: please wait a second and try again.",
    sent: "THANK YOU! YOUR MESSAGE HAS BEEN SENT.",
    send_failed: "Sorry, the message could not be sent. Try again later.",
};

impl UiText {
    /// English text for `en`, Bulgarian for every other locale.
    #[must_use]
    pub fn for_locale(locale: &str) -> &'static UiText {
        if locale == "en" { &EN } else { &BG }
    }
}
