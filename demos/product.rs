//! Product validation example
//!
//! Validates a product catalogue entry field by field, the way a handler
//! would for a create request (all fields) and for a partial update (only the
//! fields named in the update mask).
//!
//! Run with `cargo run --example product --features tracing` to also see the
//! dispatcher's debug events.

use fieldcheck::{FieldMask, Semigroup, ValidationMap, ValidationMapper, Validator};

#[derive(Debug)]
struct Product {
    sku: String,
    name: String,
    price_cents: i64,
}

impl Product {
    fn validate_sku(&self) -> Result<(), String> {
        if self.sku.len() != 8 || !self.sku.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("sku {:?} must be 8 alphanumeric characters", self.sku));
        }
        Ok(())
    }

    fn validate_name(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty");
        }
        Ok(())
    }

    fn validate_price(&self) -> Result<(), &'static str> {
        if self.price_cents <= 0 {
            return Err("price must be positive");
        }
        Ok(())
    }
}

impl ValidationMapper for Product {
    fn validation_map(&self) -> ValidationMap<'_> {
        ValidationMap::new()
            .field("sku", || self.validate_sku())
            .field("name", || self.validate_name())
            .field("price", || self.validate_price())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== Product Validation ===\n");

    let valid = Product {
        sku: "AB12CD34".to_string(),
        name: "Green tea".to_string(),
        price_cents: 450,
    };
    match valid.validate() {
        Ok(()) => println!("✓ {:?} is valid", valid.name),
        Err(err) => println!("✗ Errors:\n{}", err),
    }

    println!("\n---\n");

    let invalid = Product {
        sku: "AB-1".to_string(),
        name: " ".to_string(),
        price_cents: 0,
    };
    println!("Create request, every field:");
    if let Err(err) = invalid.validate() {
        print!("{}", err);
    }

    println!("\n---\n");

    let mask = FieldMask::parse("price,discount");
    println!("Partial update with mask {:?}:", mask.to_string());
    if let Err(err) = invalid.validate_mask(&mask) {
        print!("{}", err);
    }

    println!("\n---\n");

    println!("Merged report for a batch:");
    let merged = [&valid, &invalid]
        .iter()
        .filter_map(|product| product.validate().err())
        .filter_map(|err| err.into_field_errors())
        .reduce(Semigroup::combine);
    match merged {
        Some(report) => print!("{}", report),
        None => println!("✓ batch is valid"),
    }
}
