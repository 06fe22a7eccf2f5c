//! Storage column converters
//!
//! A unit is stored as its raw `f64` magnitude. Nullable columns map
//! `None` to `None` in both directions.

use std::marker::PhantomData;

use measure_core::Scalar;

pub fn to_storage<T: Scalar>(value: T) -> f64 {
    value.magnitude()
}

pub fn from_storage<T: Scalar>(value: f64) -> T {
    T::from_magnitude(value)
}

pub fn to_storage_nullable<T: Scalar>(value: Option<T>) -> Option<f64> {
    value.map(to_storage)
}

pub fn from_storage_nullable<T: Scalar>(value: Option<f64>) -> Option<T> {
    value.map(from_storage)
}

/// Two-way mapping between a model value and its stored form
pub trait ColumnConverter {
    type Model;
    type Provider;

    fn to_provider(&self, model: Self::Model) -> Self::Provider;
    fn from_provider(&self, provider: Self::Provider) -> Self::Model;
}

/// `T` stored as a non-null double column
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarColumn<T> {
    _unit: PhantomData<fn() -> T>,
}

impl<T: Scalar> ScalarColumn<T> {
    pub const fn new() -> Self {
        Self { _unit: PhantomData }
    }
}

impl<T: Scalar> ColumnConverter for ScalarColumn<T> {
    type Model = T;
    type Provider = f64;

    fn to_provider(&self, model: T) -> f64 {
        to_storage(model)
    }

    fn from_provider(&self, provider: f64) -> T {
        from_storage(provider)
    }
}

/// `Option<T>` stored as a nullable double column
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableScalarColumn<T> {
    _unit: PhantomData<fn() -> T>,
}

impl<T: Scalar> NullableScalarColumn<T> {
    pub const fn new() -> Self {
        Self { _unit: PhantomData }
    }
}

impl<T: Scalar> ColumnConverter for NullableScalarColumn<T> {
    type Model = Option<T>;
    type Provider = Option<f64>;

    fn to_provider(&self, model: Option<T>) -> Option<f64> {
        to_storage_nullable(model)
    }

    fn from_provider(&self, provider: Option<f64>) -> Option<T> {
        from_storage_nullable(provider)
    }
}
