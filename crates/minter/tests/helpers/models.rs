//! Shared fixture models for minter integration tests.

// Not every test binary touches every model.
#![allow(dead_code)]

use chrono::NaiveDateTime;
use minter::Reflect;

/// Nested composite used to exercise recursive filling.
#[derive(Debug, Default, Clone, PartialEq, Reflect)]
pub struct Address {
	pub street: String,
	pub city: String,
	pub zip: u32,
}

/// Flat-and-nested model covering every supported field shape.
#[derive(Debug, Default, Clone, PartialEq, Reflect)]
pub struct Customer {
	pub name: String,
	pub age: u8,
	pub balance: f64,
	pub active: bool,
	pub joined: Option<NaiveDateTime>,
	pub nickname: Option<String>,
	pub address: Address,
	pub shipping: Option<Address>,

	#[reflect(skip)]
	pub audit_token: String,
}

/// Minimal model for chaining tests.
#[derive(Debug, Default, Clone, PartialEq, Reflect)]
pub struct Person {
	pub name: String,
	pub age: u8,
}
