//! Page type catalog
//!
//! Display metadata for each [`PageType`]. Consumers that only need the tag
//! never have to touch this table.

use crate::page_type::PageType;

/// Display metadata for a page type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTypeInfo {
    pub page_type: PageType,
    pub name: &'static str,
    pub description: &'static str,
    /// Lucide icon name
    pub icon: &'static str,
    pub premium: bool,
}

const fn entry(
    page_type: PageType,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
) -> PageTypeInfo {
    PageTypeInfo {
        page_type,
        name,
        description,
        icon,
        premium: false,
    }
}

static FORM: PageTypeInfo = entry(
    PageType::Form,
    "Form",
    "Page to collect user input",
    "form-input",
);
static COVER: PageTypeInfo = entry(
    PageType::Cover,
    "Cover",
    "Welcome users to your form",
    "book-open",
);
static ENDING: PageTypeInfo = entry(
    PageType::Ending,
    "Ending",
    "Show a thank you page or redirect users",
    "check-circle-2",
);
static REVIEW: PageTypeInfo = entry(
    PageType::Review,
    "Review",
    "Let users review their submission",
    "eye",
);
static PAYMENT: PageTypeInfo = entry(
    PageType::Payment,
    "Payment",
    "Collect payments with Stripe",
    "credit-card",
);
static LOGIN: PageTypeInfo = PageTypeInfo {
    premium: true,
    ..entry(
        PageType::Login,
        "Login",
        "Let users login with email, password or SSO",
        "lock",
    )
};
static SCHEDULING: PageTypeInfo = entry(
    PageType::Scheduling,
    "Scheduling",
    "Book meetings on your calendar",
    "calendar",
);
static INFO: PageTypeInfo = entry(PageType::Info, "Info", "Information page", "info");
static COMPLETED: PageTypeInfo = entry(
    PageType::Completed,
    "Completed",
    "Completion page",
    "check-circle-2",
);
static DOCUMENT: PageTypeInfo = entry(
    PageType::Document,
    "Document",
    "Document page",
    "file-text",
);

impl PageType {
    pub fn metadata(&self) -> &'static PageTypeInfo {
        match self {
            PageType::Form => &FORM,
            PageType::Cover => &COVER,
            PageType::Ending => &ENDING,
            PageType::Review => &REVIEW,
            PageType::Payment => &PAYMENT,
            PageType::Login => &LOGIN,
            PageType::Scheduling => &SCHEDULING,
            PageType::Info => &INFO,
            PageType::Completed => &COMPLETED,
            // `default` has no entry of its own
            PageType::Document | PageType::Default => &DOCUMENT,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.metadata().premium
    }
}

/// Metadata for an optional tag, falling back to the document entry.
pub fn page_type_info(page_type: Option<PageType>) -> &'static PageTypeInfo {
    page_type.unwrap_or(PageType::Document).metadata()
}

/// Chooser entries, in display order.
pub fn selectable_page_types() -> impl Iterator<Item = &'static PageTypeInfo> {
    PageType::selectable().iter().map(|t| t.metadata())
}
