// SPDX-License-Identifier: MPL-2.0
//! Internationalization via Fluent.

pub mod fluent;
