//! Fixed overlay layout for the disposal instruction form
//!
//! Coordinates are PDF points with the origin at the bottom-left corner
//! of an A4 page, matching the scanned backgrounds `1.jpeg`..`3.jpeg`.

use crate::model::{FormRecord, TableEntry};
use pdf_core::{FontWeight, PageSize, StandardFont};

/// A single value of [`FormRecord`] that can be placed on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    BranchName,
    AccountNumber100,
    InrAccountPercent,
    EefcAccountPercent,
    EefcAccount100,
    PurposeCode,
    RemitterAddress,
    Currency,
    MaxAmount,
    RegistrationNumber,
    Date,
    Place,
    ApplicantName,
    ApplicantAddress,
    IeCode,
    /// `dated` of the first table entry, printed in the page 3 header
    FirstEntryDated,
}

impl FormField {
    /// Resolve the field against a form record
    pub fn value(self, form: &FormRecord) -> &str {
        match self {
            FormField::BranchName => &form.branch_name,
            FormField::AccountNumber100 => &form.account_number_100,
            FormField::InrAccountPercent => &form.inr_account_percent,
            FormField::EefcAccountPercent => &form.eefc_account_percent,
            FormField::EefcAccount100 => &form.eefc_account_100,
            FormField::PurposeCode => &form.purpose_code,
            FormField::RemitterAddress => &form.remitter_address,
            FormField::Currency => &form.currency,
            FormField::MaxAmount => &form.max_amount,
            FormField::RegistrationNumber => &form.registration_number,
            FormField::Date => &form.date,
            FormField::Place => &form.place,
            FormField::ApplicantName => &form.applicant_name,
            FormField::ApplicantAddress => &form.applicant_address,
            FormField::IeCode => &form.ie_code,
            FormField::FirstEntryDated => form.first_entry_dated(),
        }
    }
}

/// Where a field is drawn on its page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPlacement {
    pub field: FormField,
    pub x: f64,
    pub y: f64,
    pub weight: FontWeight,
}

impl FieldPlacement {
    const fn regular(field: FormField, x: f64, y: f64) -> Self {
        Self {
            field,
            x,
            y,
            weight: FontWeight::Regular,
        }
    }

    const fn bold(field: FormField, x: f64, y: f64) -> Self {
        Self {
            field,
            x,
            y,
            weight: FontWeight::Bold,
        }
    }
}

/// A column of the disposal table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    RemitterName,
    PurposeCode,
    Remarks,
}

impl TableColumn {
    /// Resolve the column against a table entry
    pub fn value(self, entry: &TableEntry) -> &str {
        match self {
            TableColumn::RemitterName => &entry.remitter_name,
            TableColumn::PurposeCode => &entry.purpose_code,
            TableColumn::Remarks => &entry.remarks,
        }
    }
}

/// Repeating rows, one per [`TableEntry`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    /// Baseline of the first row
    pub start_y: f64,
    /// Distance between consecutive rows, moving down the page
    pub row_height: f64,
    pub columns: &'static [(TableColumn, f64)],
}

impl TableLayout {
    /// Baseline of the row at `index` (zero-based)
    ///
    /// Rows are never wrapped onto another page; a long table keeps
    /// descending past the bottom margin.
    pub fn row_y(&self, index: usize) -> f64 {
        self.start_y - index as f64 * self.row_height
    }
}

/// One page of the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Background file name, looked up through a [`crate::BackgroundSource`]
    pub background: &'static str,
    pub fields: &'static [FieldPlacement],
    pub table: Option<TableLayout>,
}

/// The whole form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormLayout {
    pub pages: &'static [PageLayout],
    /// Size shared by every page
    pub page_size: PageSize,
    pub font: StandardFont,
    pub font_size: f32,
    /// Where the "Missing image" notice goes when a background is absent
    pub placeholder_x: f64,
    pub placeholder_y: f64,
}

const PAGE_1_FIELDS: &[FieldPlacement] = &[
    FieldPlacement::regular(FormField::BranchName, 65.0, 720.0),
    FieldPlacement::regular(FormField::AccountNumber100, 380.0, 380.0),
    FieldPlacement::regular(FormField::InrAccountPercent, 420.0, 482.0),
    FieldPlacement::regular(FormField::EefcAccountPercent, 460.0, 455.0),
    FieldPlacement::regular(FormField::EefcAccount100, 360.0, 415.0),
    FieldPlacement::regular(FormField::PurposeCode, 460.0, 230.0),
    FieldPlacement::regular(FormField::RemitterAddress, 340.0, 590.0),
    FieldPlacement::regular(FormField::Currency, 320.0, 550.0),
    FieldPlacement::regular(FormField::MaxAmount, 420.0, 550.0),
];

const PAGE_2_FIELDS: &[FieldPlacement] = &[
    FieldPlacement::regular(FormField::RegistrationNumber, 342.0, 390.0),
    FieldPlacement::regular(FormField::Date, 100.0, 122.0),
    FieldPlacement::regular(FormField::Place, 100.0, 110.0),
    FieldPlacement::regular(FormField::ApplicantName, 380.0, 83.0),
    FieldPlacement::regular(FormField::ApplicantAddress, 380.0, 70.0),
    FieldPlacement::regular(FormField::IeCode, 380.0, 57.0),
];

const PAGE_3_FIELDS: &[FieldPlacement] =
    &[FieldPlacement::bold(FormField::FirstEntryDated, 390.0, 783.0)];

const DISPOSAL_TABLE: TableLayout = TableLayout {
    start_y: 740.0,
    row_height: 20.0,
    columns: &[
        (TableColumn::RemitterName, 75.0),
        (TableColumn::PurposeCode, 220.0),
        (TableColumn::Remarks, 420.0),
    ],
};

/// Layout of the three-page Axis Bank disposal instruction
pub const DISPOSAL_LAYOUT: FormLayout = FormLayout {
    pages: &[
        PageLayout {
            background: "1.jpeg",
            fields: PAGE_1_FIELDS,
            table: None,
        },
        PageLayout {
            background: "2.jpeg",
            fields: PAGE_2_FIELDS,
            table: None,
        },
        PageLayout {
            background: "3.jpeg",
            fields: PAGE_3_FIELDS,
            table: Some(DISPOSAL_TABLE),
        },
    ],
    page_size: PageSize::A4,
    font: StandardFont::Helvetica,
    font_size: 12.0,
    placeholder_x: 100.0,
    placeholder_y: 800.0,
};
