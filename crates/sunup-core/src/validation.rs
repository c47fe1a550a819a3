//! # Validation Module
//!
//! Pre-flight validation for operator-edited menu items.
//!
//! The catalog store's mutation operations are total by design (they never
//! reject input, see the store docs), so an item editor runs these checks
//! *before* handing an item over. Keeping them here keeps the rules pure
//! and reusable.

use crate::error::{ValidationError, ValidationResult};
use crate::menu::{MenuItem, VariantKind};

/// Validates an item name: must be non-blank after trimming.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    Ok(())
}

/// Validates that every populated price field is non-negative.
///
/// Absent fields are fine; "not applicable" is expressed by omission, not
/// by sentinel values.
pub fn validate_prices(item: &MenuItem) -> ValidationResult<()> {
    for kind in VariantKind::ALL {
        if let Some(price) = item.price(kind) {
            if price.is_negative() {
                return Err(ValidationError::NegativePrice {
                    field: kind.field_name().to_string(),
                    value: price.units(),
                });
            }
        }
    }
    Ok(())
}

/// Validates that no flavor entry is blank.
pub fn validate_flavors(item: &MenuItem) -> ValidationResult<()> {
    for (i, flavor) in item.flavor_list().iter().enumerate() {
        if flavor.trim().is_empty() {
            return Err(ValidationError::BlankFlavor { position: i + 1 });
        }
    }
    Ok(())
}

/// Runs every item check. First failure wins.
pub fn validate_item(item: &MenuItem) -> ValidationResult<()> {
    validate_name(&item.name)?;
    validate_prices(item)?;
    validate_flavors(item)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        assert!(validate_name("Ham Toast").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let ok = MenuItem::new("Toast").with_price(VariantKind::Regular, 0);
        assert!(validate_prices(&ok).is_ok());

        let bad = MenuItem::new("Toast").with_price(VariantKind::Small, -5);
        assert_eq!(
            validate_prices(&bad),
            Err(ValidationError::NegativePrice {
                field: "price_small".to_string(),
                value: -5,
            })
        );
    }

    #[test]
    fn test_blank_flavor_rejected() {
        let bad = MenuItem::new("Tea").with_flavors(["Black", " "]);
        assert_eq!(
            validate_flavors(&bad),
            Err(ValidationError::BlankFlavor { position: 2 })
        );
    }

    #[test]
    fn test_validate_item_runs_all_checks() {
        let item = MenuItem::new("Jam Toast")
            .with_price(VariantKind::Regular, 25)
            .with_flavors(["Strawberry", "Peanut"]);
        assert!(validate_item(&item).is_ok());

        assert!(validate_item(&MenuItem::new("")).is_err());
    }
}
