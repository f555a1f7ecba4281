//! Data model shared by every algorithm
//!
//! This module provides the values the engines move around:
//! - [`Element`]: an immutable value with a display color
//! - [`Container`]: a fixed-capacity row of optional elements
//! - [`InitOrder`]: how a fresh container is filled
//! - [`cursor`]: named indices into the container
//!
//! # Empty Cells
//!
//! Sort containers are always fully occupied. The priority queue and stack
//! demos leave cells empty (`None`) when items are removed, so the container
//! stores `Option<Element>` throughout.

pub mod cursor;

use crate::engine::constants::MAX_BAR_HEIGHT;
use rand::Rng;

/// An RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Draw each channel uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Color derived from a bar height: short bars are blue, tall bars red
    pub fn gradient(value: i32) -> Self {
        let clamped = value.clamp(0, MAX_BAR_HEIGHT - 1);
        let red = (clamped * 255 / (MAX_BAR_HEIGHT - 1)) as u8;
        Rgb::new(red, 96, 255 - red)
    }
}

/// A single sortable or storable item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: i32,
    pub color: Rgb,
}

impl Element {
    pub fn new(value: i32, color: Rgb) -> Self {
        Element { value, color }
    }

    pub fn random_colored<R: Rng + ?Sized>(value: i32, rng: &mut R) -> Self {
        Element::new(value, Rgb::random(rng))
    }

    pub fn gradient(value: i32) -> Self {
        Element::new(value, Rgb::gradient(value))
    }
}

/// Initial arrangement applied when a container is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitOrder {
    #[default]
    Random,
    ReverseSorted,
}

impl InitOrder {
    pub fn toggled(self) -> Self {
        match self {
            InitOrder::Random => InitOrder::ReverseSorted,
            InitOrder::ReverseSorted => InitOrder::Random,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InitOrder::Random => "random",
            InitOrder::ReverseSorted => "reverse",
        }
    }
}

/// Fixed-capacity ordered sequence of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    slots: Vec<Option<Element>>,
}

impl Container {
    /// A container of `capacity` empty cells
    pub fn empty(capacity: usize) -> Self {
        Container {
            slots: vec![None; capacity],
        }
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Container {
            slots: elements.into_iter().map(Some).collect(),
        }
    }

    /// Fully occupied container with gradient colors
    pub fn from_values(values: &[i32]) -> Self {
        Container::from_elements(values.iter().map(|&v| Element::gradient(v)).collect())
    }

    /// Heights uniform in `[0, MAX_BAR_HEIGHT)`, colors uniform
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let elements = (0..size)
            .map(|_| {
                let value = rng.gen_range(0..MAX_BAR_HEIGHT);
                Element::random_colored(value, rng)
            })
            .collect();
        Container::from_elements(elements)
    }

    /// Strictly decreasing heights, linear in the index
    pub fn reverse_sorted(size: usize) -> Self {
        if size == 0 {
            return Container::empty(0);
        }
        let span = (MAX_BAR_HEIGHT - 1) as usize;
        let elements = (0..size)
            .map(|i| Element::gradient(((size - i) * span / size) as i32))
            .collect();
        Container::from_elements(elements)
    }

    pub fn generate<R: Rng + ?Sized>(size: usize, order: InitOrder, rng: &mut R) -> Self {
        match order {
            InitOrder::Random => Container::random(size, rng),
            InitOrder::ReverseSorted => Container::reverse_sorted(size),
        }
    }

    /// Capacity, including empty cells
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Element> {
        self.slots.get(index).copied().flatten()
    }

    pub fn value(&self, index: usize) -> Option<i32> {
        self.get(index).map(|e| e.value)
    }

    pub fn set(&mut self, index: usize, element: Option<Element>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = element;
        }
    }

    pub fn take(&mut self, index: usize) -> Option<Element> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.slots.len() && b < self.slots.len() {
            self.slots.swap(a, b);
        }
    }

    pub fn slots(&self) -> &[Option<Element>] {
        &self.slots
    }

    /// Values of occupied cells, in slot order
    pub fn values(&self) -> Vec<i32> {
        self.slots.iter().flatten().map(|e| e.value).collect()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Non-decreasing over occupied cells
    pub fn is_sorted(&self) -> bool {
        self.values().windows(2).all(|w| w[0] <= w[1])
    }
}
