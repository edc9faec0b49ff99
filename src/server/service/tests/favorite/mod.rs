mod add;
mod remove;

use super::*;

use crate::{model::favorite::FavoriteKind, server::service::favorite::FavoriteService};
