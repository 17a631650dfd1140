//! Basic usage example for formkit-validator

use formkit_validator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rules = RuleSet::from_json(r#"{ "hasLength": { "min": 3, "max": 16 }, "isAlpha": true }"#)?
        .custom("notReserved", Some("This name is reserved"), |v| v != "admin")?;

    let handlers = Handlers::new().on_validation_finish(|errors| {
        for error in errors {
            println!("  - {error}");
        }
    });

    let mut login = FieldValidator::new(
        InputField::new("login", "al1"),
        rules,
        handlers,
        Settings::new(Locale::Ru),
    );

    println!("'al1':");
    login.validate()?;

    login.field_mut().set_value("admin");
    println!("'admin':");
    login.validate()?;

    login.field_mut().set_value("alice");
    login.validate()?;
    println!("'alice' is valid: {}", login.is_valid());

    Ok(())
}
