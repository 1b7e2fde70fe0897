// handlers/mod.rs - Resource handlers
//
// One module per resource, one file per operation:
//   contacts/  POST, GET (list), GET /:id, PUT /:id, DELETE /:id
//   groups/    POST, GET (list), GET /:id
//   root.rs    welcome banner and health probe
//   payload.rs body extractor shared by the write endpoints
//
// Every handler runs validation -> uniqueness check -> store call and maps
// failures into the `ApiError` envelope locally.

pub mod contacts;
pub mod groups;
pub mod payload;
pub mod root;
