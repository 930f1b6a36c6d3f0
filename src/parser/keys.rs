//! Built-in recognized key lists, in display priority order.

/// Cookie policy sections.
pub const COOKIE_POLICY: &[&str] = &[
    "title",
    "lastUpdated",
    "introduction",
    "whatAreCookies",
    "howWeUseCookies",
    "typesOfCookies",
    "essentialCookies",
    "analyticsCookies",
    "marketingCookies",
    "thirdPartyCookies",
    "managingCookies",
    "changesToPolicy",
    "contactUs",
];

/// Privacy policy sections.
pub const PRIVACY_POLICY: &[&str] = &[
    "title",
    "lastUpdated",
    "introduction",
    "dataWeCollect",
    "howWeUseData",
    "dataSharing",
    "dataRetention",
    "yourRights",
    "security",
    "children",
    "changesToPolicy",
    "contactUs",
];

/// Terms of service sections.
pub const TERMS: &[&str] = &[
    "title",
    "lastUpdated",
    "acceptance",
    "eligibility",
    "accounts",
    "listings",
    "payments",
    "prohibitedConduct",
    "intellectualProperty",
    "disclaimers",
    "limitationOfLiability",
    "termination",
    "governingLaw",
    "contactUs",
];

/// FAQ groups.
pub const FAQ: &[&str] = &[
    "title",
    "general",
    "buying",
    "selling",
    "payments",
    "shipping",
    "returns",
    "account",
    "contactUs",
];

/// Used for document types without a dedicated list.
pub const GENERIC: &[&str] = &["title", "introduction", "body", "summary", "contactUs"];

/// Key list for a document type identifier.
pub fn for_document_type(id: &str) -> &'static [&'static str] {
    match id {
        "cookie-policy" => COOKIE_POLICY,
        "privacy-policy" => PRIVACY_POLICY,
        "terms" => TERMS,
        "faq" => FAQ,
        _ => GENERIC,
    }
}
