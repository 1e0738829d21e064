//! Range and enum checks on raw input. Rules run in order; the first failure wins.

use super::{CustomerFeatures, CustomerInput, Gender, ProductCategory};
use crate::error::ValidationError;

const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 120;
const MAX_DISCOUNTS: i64 = 5;

pub fn validate(input: &CustomerInput) -> Result<CustomerFeatures, ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
        return Err(ValidationError::InvalidAge);
    }
    if input.annual_income < 0.0 {
        return Err(ValidationError::NegativeIncome);
    }
    if input.time_spent < 0.0 {
        return Err(ValidationError::NegativeTimeSpent);
    }
    if input.number_of_purchases < 0 {
        return Err(ValidationError::NegativePurchaseCount);
    }

    let gender = Gender::from_code(input.gender).ok_or(ValidationError::InvalidGender)?;
    let product_category = ProductCategory::from_code(input.product_category)
        .ok_or(ValidationError::InvalidProductCategory)?;
    let loyalty_program = match input.loyalty_program {
        0 => false,
        1 => true,
        _ => return Err(ValidationError::InvalidLoyaltyProgram),
    };
    if !(0..=MAX_DISCOUNTS).contains(&input.discounts_availed) {
        return Err(ValidationError::InvalidDiscounts);
    }
    // NaN slips past the sign checks above
    if !input.annual_income.is_finite() {
        return Err(ValidationError::NonFiniteIncome);
    }
    if !input.time_spent.is_finite() {
        return Err(ValidationError::NonFiniteTimeSpent);
    }

    Ok(CustomerFeatures {
        age: input.age as u8,
        gender,
        annual_income: input.annual_income,
        number_of_purchases: input.number_of_purchases as u64,
        product_category,
        time_spent_on_website: input.time_spent,
        loyalty_program,
        discounts_availed: input.discounts_availed as u8,
    })
}
