mod create;
mod delete;
mod get_characters;
mod update;

use super::*;

use crate::server::service::species::SpeciesService;
