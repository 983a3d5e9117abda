mod executable_document;
mod operation_kind;

pub use executable_document::DocumentBuildError;
pub use executable_document::ExecutableDocument;
pub use executable_document::OperationDefinitionRef;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod tests;
