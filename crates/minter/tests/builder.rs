//! Integration tests for the chaining facade and production engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use minter::prelude::*;
use rstest::rstest;

#[path = "helpers/models.rs"]
mod models;

use models::Person;

#[rstest]
fn test_many_yields_exactly_n_instances() {
	for count in [0usize, 1, 10, 100] {
		let produced = Builder::<Person>::new().many(count).build();
		assert_eq!(produced.count(), count);
	}
}

#[rstest]
fn test_first_last_with_chain_default() -> MinterResult<()> {
	let ages: Vec<_> = Builder::<Person>::new()
		.many(10)
		.with_default(|p| p.age = 56)
		.with_first(2, |p| p.age = 19)?
		.with_last(2, |p| p.age = 5)?
		.build()
		.map(|p| p.age)
		.collect();
	assert_eq!(ages, vec![19, 19, 56, 56, 56, 56, 56, 56, 5, 5]);
	Ok(())
}

#[rstest]
fn test_guard_counts_partition_the_node() -> MinterResult<()> {
	let marked: Vec<_> = Builder::<Person>::new()
		.many(8)
		.with_first(3, |p| p.age = 1)?
		.build()
		.map(|p| p.age == 1)
		.collect();
	assert_eq!(marked.iter().filter(|&&m| m).count(), 3);
	assert_eq!(marked.iter().filter(|&&m| !m).count(), 5);
	Ok(())
}

#[rstest]
fn test_oversized_guard_fails_before_any_production() {
	let result = Builder::<Person>::new().many(10).with_last(11, |p| p.age = 1);
	assert!(matches!(
		result,
		Err(MinterError::GuardOutOfRange {
			requested: 11,
			total: 10
		})
	));
}

#[rstest]
fn test_registration_order_wins_over_guard_shape() -> MinterResult<()> {
	// First(6) and Last(6) overlap on indices 4 and 5; the later-registered
	// transform wins there. A later slice covering index 5 wins again.
	let ages: Vec<_> = Builder::<Person>::new()
		.many(10)
		.with_first(6, |p| p.age = 1)?
		.with_last(6, |p| p.age = 2)?
		.with_between(1, 5, |p| p.age = 3)?
		.build()
		.map(|p| p.age)
		.collect();
	assert_eq!(ages, vec![1, 1, 1, 1, 2, 3, 2, 2, 2, 2]);
	Ok(())
}

#[rstest]
fn test_last_registered_with_wins_on_same_field() {
	let person = Builder::<Person>::new()
		.with(|p| p.name = "first".into())
		.with(|p| p.name = "second".into())
		.build();
	assert_eq!(person.name, "second");
}

#[rstest]
fn test_many_plus_produces_a_plus_b_with_per_node_configuration() -> MinterResult<()> {
	let people: Vec<_> = Builder::<Person>::new()
		.many(3)
		.with(|p| p.name = "a".into())
		.with_first(1, |p| p.age = 9)?
		.plus(2)
		.with(|p| p.name = "b".into())
		.build()
		.collect();
	assert_eq!(people.len(), 5);
	assert!(people[..3].iter().all(|p| p.name == "a"));
	assert!(people[3..].iter().all(|p| p.name == "b"));
	// Node-A configuration does not leak into node B.
	assert_eq!(people[0].age, 9);
	assert!(people[3..].iter().all(|p| p.age == 0));
	Ok(())
}

#[rstest]
fn test_default_registered_after_plus_reaches_every_node() {
	let ages: Vec<_> = Builder::<Person>::new()
		.many(2)
		.plus(2)
		.with_default(|p| p.age = 56)
		.build()
		.map(|p| p.age)
		.collect();
	assert_eq!(ages, vec![56, 56, 56, 56]);
}

#[rstest]
fn test_many_restart_discards_previous_configuration() {
	let people: Vec<_> = Builder::<Person>::new()
		.many(5)
		.with(|p| p.age = 77)
		.many(2)
		.build()
		.collect();
	assert_eq!(people.len(), 2);
	assert!(people.iter().all(|p| p.age == 0));
}

#[rstest]
fn test_production_is_lazy_and_reruns_constructors() {
	let constructed = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&constructed);
	let mut production = Builder::with_constructor(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		Person::default()
	})
	.many(4)
	.build();

	assert_eq!(constructed.load(Ordering::SeqCst), 0);
	production.next();
	production.next();
	assert_eq!(constructed.load(Ordering::SeqCst), 2);
	production.for_each(drop);
	assert_eq!(constructed.load(Ordering::SeqCst), 4);
}

#[rstest]
fn test_custom_constructor_shared_by_plus_one() {
	let person = Builder::with_constructor(|| Person {
		name: "seed".into(),
		age: 50,
	})
	.plus_one()
	.with(|p| p.age = 51)
	.plus(0)
	.build()
	.last()
	.expect("two instances in the chain");
	assert_eq!(person.name, "seed");
	assert_eq!(person.age, 51);
}

#[rstest]
fn test_single_build_returns_first_instance_of_the_chain() {
	let person = Builder::<Person>::new()
		.with(|p| p.age = 3)
		.plus_one()
		.with(|p| p.age = 8)
		.build();
	assert_eq!(person.age, 3);
}

#[rstest]
fn test_single_build_skips_zero_count_nodes() {
	let person = Builder::<Person>::new()
		.many(0)
		.plus_one()
		.with(|p| p.age = 8)
		.build();
	// The empty root node yields nothing; the first produced instance of
	// the chain comes from the appended single-instance node.
	assert_eq!(person.age, 8);
}

#[rstest]
fn test_production_reports_exact_length() {
	let production = Builder::<Person>::new().many(4).plus(3).build();
	assert_eq!(production.len(), 7);
}
