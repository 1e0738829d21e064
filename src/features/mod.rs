//! Customer attributes: raw input, validated record, and model-ordered feature vector.

mod assembler;
mod validator;

pub use assembler::{assemble, FeatureColumns};
pub use validator::validate;

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Eight raw fields as entered by the user, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub age: i64,
    /// 0 = Male, 1 = Female
    pub gender: i64,
    pub annual_income: f64,
    pub number_of_purchases: i64,
    /// 0=Electronics, 1=Clothing, 2=Home, 3=Beauty, 4=Sports
    pub product_category: i64,
    /// Minutes spent on the website
    #[serde(alias = "time_spent_on_website")]
    pub time_spent: f64,
    /// 0 = No, 1 = Yes
    pub loyalty_program: i64,
    pub discounts_availed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Gender::Male),
            1 => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Home,
    Beauty,
    Sports,
}

impl ProductCategory {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ProductCategory::Electronics),
            1 => Some(ProductCategory::Clothing),
            2 => Some(ProductCategory::Home),
            3 => Some(ProductCategory::Beauty),
            4 => Some(ProductCategory::Sports),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Validated customer record. Only obtainable through [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerFeatures {
    age: u8,
    gender: Gender,
    annual_income: f64,
    number_of_purchases: u64,
    product_category: ProductCategory,
    time_spent_on_website: f64,
    loyalty_program: bool,
    discounts_availed: u8,
}

impl CustomerFeatures {
    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn annual_income(&self) -> f64 {
        self.annual_income
    }

    pub fn number_of_purchases(&self) -> u64 {
        self.number_of_purchases
    }

    pub fn product_category(&self) -> ProductCategory {
        self.product_category
    }

    pub fn time_spent_on_website(&self) -> f64 {
        self.time_spent_on_website
    }

    pub fn loyalty_program(&self) -> bool {
        self.loyalty_program
    }

    pub fn discounts_availed(&self) -> u8 {
        self.discounts_availed
    }

    /// Numeric value of a canonical training column, or `None` for an unknown name.
    pub fn column_value(&self, column: &str) -> Option<f64> {
        let v = match column {
            "age" => f64::from(self.age),
            "gender" => f64::from(self.gender.code()),
            "annual_income" => self.annual_income,
            "number_of_purchases" => self.number_of_purchases as f64,
            "product_category" => f64::from(self.product_category.code()),
            "time_spent_on_website" => self.time_spent_on_website,
            "loyalty_program" => f64::from(u8::from(self.loyalty_program)),
            "discounts_availed" => f64::from(self.discounts_availed),
            _ => return None,
        };
        Some(v)
    }
}

/// Single-row model input, ordered exactly as the stored feature-column list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `[1, n]` matrix for the scaler and classifier.
    pub fn to_row(&self) -> Array2<f64> {
        Array1::from(self.values.clone()).insert_axis(Axis(0))
    }
}
