// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog changes produced by `ALTER CATALOG` statements

pub mod operations;

pub use operations::CatalogChange;
