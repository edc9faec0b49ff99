mod create;
mod update;

use super::*;

use crate::server::{model::kind::EntityKind, service::character::CharacterService};
