//! Example customers offered to the user.

use crate::features::CustomerInput;

pub const EXAMPLES: [CustomerInput; 3] = [
    CustomerInput {
        age: 25,
        gender: 0,
        annual_income: 50000.0,
        number_of_purchases: 5,
        product_category: 0,
        time_spent: 30.0,
        loyalty_program: 0,
        discounts_availed: 2,
    },
    CustomerInput {
        age: 35,
        gender: 1,
        annual_income: 75000.0,
        number_of_purchases: 10,
        product_category: 1,
        time_spent: 45.0,
        loyalty_program: 1,
        discounts_availed: 3,
    },
    CustomerInput {
        age: 55,
        gender: 0,
        annual_income: 120000.0,
        number_of_purchases: 20,
        product_category: 2,
        time_spent: 60.0,
        loyalty_program: 1,
        discounts_availed: 5,
    },
];
