//! Subject catalog
//!
//! The grouped list of services a visitor can pick as the subject of an
//! enquiry. Presentation and the server handler both read this table.

use serde::Serialize;

/// A single selectable subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectOption {
    /// Value submitted with the form
    pub value: &'static str,
    /// Text shown in the picker
    pub label: &'static str,
}

impl SubjectOption {
    const fn same(value: &'static str) -> Self {
        Self { value, label: value }
    }
}

/// A named group of subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectCategory {
    pub name: &'static str,
    pub options: &'static [SubjectOption],
}

/// Versioned, read-only subject table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubjectCatalog {
    version: &'static str,
    categories: &'static [SubjectCategory],
}

pub static CATALOG: SubjectCatalog = SubjectCatalog {
    version: "2024.1",
    categories: &[
        SubjectCategory {
            name: "Insurance",
            options: &[
                SubjectOption::same("Mutual Fund Planning"),
                SubjectOption::same("Equity Portfolio Advisory"),
                SubjectOption::same("NRI Investment Services"),
                SubjectOption::same("Wealth Building Workshops"),
                SubjectOption::same("Alternative Investment Funds"),
                SubjectOption::same("Portfolio Management Services"),
                SubjectOption::same("Non-Convertible Debentures"),
                SubjectOption::same("Smallcase Portfolios"),
                SubjectOption::same("Life Insurance"),
                SubjectOption::same("Health Insurance"),
                SubjectOption::same("Bonds"),
                SubjectOption::same("Invoice Discounting / FDs"),
                SubjectOption::same("Home Loans"),
                SubjectOption::same("Education Loans"),
                SubjectOption::same("Loan Against Mutual Funds"),
            ],
        },
        SubjectCategory {
            name: "Software Solutions",
            options: &[
                SubjectOption::same("Website Hosting & Domain"),
                SubjectOption::same("Google Workspace"),
                SubjectOption::same("SME Digital Launch Pack"),
                SubjectOption::same("Technical Consulting"),
            ],
        },
        SubjectCategory {
            name: "Beart Foundation",
            options: &[SubjectOption {
                value: "Beart Foundation",
                label: "General Enquiry",
            }],
        },
    ],
};

impl SubjectCatalog {
    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn categories(&self) -> &'static [SubjectCategory] {
        self.categories
    }

    /// All options in display order
    pub fn options(&self) -> impl Iterator<Item = &'static SubjectOption> {
        self.categories.iter().flat_map(|category| category.options.iter())
    }

    /// Look up the category and option for a submitted value
    pub fn find(&self, value: &str) -> Option<(&'static SubjectCategory, &'static SubjectOption)> {
        self.categories.iter().find_map(|category| {
            category
                .options
                .iter()
                .find(|option| option.value == value)
                .map(|option| (category, option))
        })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }
}
