//! # Catalog Resolver
//!
//! Maps requested (product-id, quantity) pairs to concrete product records.
//!
//! Requested ids are 1-based positions into the catalog list: id `k` maps
//! to list index `k-1`. Resolution is all-or-nothing: one bad id fails the
//! entire request with a typed error, never a partial or empty result.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::MAX_PRODUCT_ID;

// =============================================================================
// Resolved Line
// =============================================================================

/// One requested line resolved against the catalog.
///
/// Carries its own copy of the product so downstream pricing works on a
/// frozen snapshot of the catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLine {
    /// The catalog product the requested id resolved to.
    pub product: Product,

    /// Requested quantity (not yet checked against stock).
    pub quantity: u32,
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves the requested id → quantity mapping against the product list.
///
/// ## Contract
/// - Each id must lie in [1, [`MAX_PRODUCT_ID`]]; any id outside that range
///   fails the whole resolution with [`CoreError::ProductIdOutOfRange`].
/// - An in-range id past the end of a short catalog fails the same way,
///   as [`CoreError::UnknownProduct`].
/// - No quantity or stock validation happens here; that is the
///   evaluator's job, per line.
///
/// Lines come back in the request map's iteration order (ascending id),
/// which fixes the order stock shortfalls are detected in.
///
/// ## Example
/// ```rust
/// use std::collections::BTreeMap;
/// use check_core::catalog::resolve;
/// use check_core::Product;
///
/// let products = vec![Product {
///     id: 1,
///     description: "Milk".to_string(),
///     price_cents: 107,
///     quantity_in_stock: 10,
///     wholesale: false,
/// }];
///
/// let mut requested = BTreeMap::new();
/// requested.insert(1, 3);
///
/// let lines = resolve(&products, &requested).unwrap();
/// assert_eq!(lines[0].product.description, "Milk");
/// assert_eq!(lines[0].quantity, 3);
/// ```
pub fn resolve(
    products: &[Product],
    requested: &BTreeMap<u32, u32>,
) -> CoreResult<Vec<ResolvedLine>> {
    let mut lines = Vec::with_capacity(requested.len());

    for (&id, &quantity) in requested {
        if id < 1 || id > MAX_PRODUCT_ID {
            return Err(CoreError::ProductIdOutOfRange { id });
        }

        // id is a 1-based position into the catalog list
        let product = products
            .get((id - 1) as usize)
            .ok_or(CoreError::UnknownProduct { id })?;

        lines.push(ResolvedLine {
            product: product.clone(),
            quantity,
        });
    }

    Ok(lines)
}

// =============================================================================
// Unit Tests
// =============================================================================
