// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The text model the scanners and edit strategies operate on.

pub mod damage;
pub mod document;

pub use damage::{TextChange, TextChangeType, damage_region};
pub use document::{Document, DocumentError, DocumentResult};
