mod character;
mod favorite;
mod species;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::server::error::{catalog::CatalogError, Error};
