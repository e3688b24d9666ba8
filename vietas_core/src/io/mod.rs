//! Loading the raw point data.
//!
//! A [`DataSource`] names the resource, [`open_loader`] picks the matching [`DataLoaderTrait`]
//! implementation. Loaders fetch exactly once and never retry.

mod data_loader;
mod data_loader_file;
mod data_loader_http;
mod data_loader_memory;
mod data_source;

pub use data_loader::*;
pub use data_loader_file::DataLoaderFile;
pub use data_loader_http::DataLoaderHttp;
pub use data_loader_memory::DataLoaderMemory;
pub use data_source::DataSource;
