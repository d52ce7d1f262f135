// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod case_datasource;
        pub(crate) mod fixture_files_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod biz_reg_no_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod request_document_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod catalog_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod basic_info;
        pub(crate) mod case;
        mod code;
        pub(crate) mod deduction_item;
        pub(crate) mod employment_year;
        pub(crate) mod financial_summary;
        pub(crate) mod generation_report;
        pub(crate) mod generator_config;
        pub(crate) mod sheet_layout;
    }
    pub(crate) mod logic {
        pub(crate) mod catalog_validator;
    }
    pub(crate) mod repositories {
        pub(crate) mod catalog_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod generate_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod json_printer;
    pub(crate) mod labels;
    pub(crate) mod workbook_layout;
    pub(crate) mod xlsx_writer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::basic_info::*;
        pub use crate::domain::entities::case::*;
        pub use crate::domain::entities::deduction_item::*;
        pub use crate::domain::entities::employment_year::*;
        pub use crate::domain::entities::financial_summary::*;
        pub use crate::domain::entities::generation_report::*;
        pub use crate::domain::entities::generator_config::*;
        pub use crate::domain::entities::sheet_layout::*;
    }
}
