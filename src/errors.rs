use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(CreateDirError, "Error creating output directory '{path}'.", { path: &str });
define_client_error!(WriteError, "Error writing file '{path}'.", { path: &str });
define_internal_error!(
    WorkbookWriteError,
    "Error writing workbook '{path}'.",
    { path: &str }
);
define_internal_error!(JsonSerializationError, "Error serializing request document.");

// Parsing-related.
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidBizRegNo,
    "Invalid business registration number: '{value}'. Expected NNN-NN-NNNNN.",
    { value: &str }
);

// Catalog-related.
define_client_error!(
    InvalidCatalogEntry,
    "Invalid test case '{case_id}': {details}.",
    { case_id: &str, details: &str }
);
define_client_error!(
    DuplicateCaseId,
    "Test case id '{case_id}' appears more than once in the catalog.",
    { case_id: &str }
);
