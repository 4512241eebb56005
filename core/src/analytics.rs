// jersey_orders/src/analytics.rs

//! Read-only statistics over an `OrderStore`.

use crate::model::{Color, JerseyType, OrderRecord, Size, Sport};
use crate::store::OrderStore;
use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Occurrence counts per value, kept in first-seen order.
///
/// Insertion order is what makes [`FrequencyTable::mode`] deterministic: among
/// values tied for the highest count, the one seen first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable<K: Hash + Eq> {
  counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
  fn default() -> Self {
    Self { counts: IndexMap::new() }
  }
}

impl<K: Hash + Eq> FrequencyTable<K> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, key: K) {
    *self.counts.entry(key).or_insert(0) += 1;
  }

  pub fn get(&self, key: &K) -> usize {
    self.counts.get(key).copied().unwrap_or(0)
  }

  /// Number of distinct values.
  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// Sum of all counts.
  pub fn total(&self) -> usize {
    self.counts.values().sum()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
    self.counts.iter().map(|(k, c)| (k, *c))
  }

  /// The most frequent value and its count; ties go to the first-seen value.
  pub fn mode(&self) -> Option<(&K, usize)> {
    let mut best: Option<(&K, usize)> = None;
    for (key, count) in self.iter() {
      match best {
        Some((_, best_count)) if count <= best_count => {}
        _ => best = Some((key, count)),
      }
    }
    best
  }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyTable<K> {
  fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
    let mut table = FrequencyTable::new();
    for key in iter {
      table.record(key);
    }
    table
  }
}

fn distribution<K, F>(store: &OrderStore, field: F) -> FrequencyTable<K>
where
  K: Hash + Eq,
  F: Fn(&OrderRecord) -> K,
{
  store.iter().map(field).collect()
}

pub fn total_count(store: &OrderStore) -> usize {
  store.len()
}

/// Modal color with its frequency, `None` for an empty store.
pub fn most_popular_color(store: &OrderStore) -> Option<(Color, usize)> {
  color_distribution(store)
    .mode()
    .map(|(color, count)| (color.clone(), count))
}

pub fn color_distribution(store: &OrderStore) -> FrequencyTable<Color> {
  distribution(store, |order| order.color().clone())
}

pub fn size_distribution(store: &OrderStore) -> FrequencyTable<Size> {
  distribution(store, OrderRecord::size)
}

pub fn sport_distribution(store: &OrderStore) -> FrequencyTable<Sport> {
  distribution(store, OrderRecord::sport)
}

pub fn jersey_type_distribution(store: &OrderStore) -> FrequencyTable<JerseyType> {
  distribution(store, OrderRecord::jersey_type)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularColor {
  pub hex: String,
  /// Upper-case hex as shown next to the swatch.
  pub display: String,
  pub orders: usize,
}

/// Everything the analytics view renders, computed from one store snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
  pub total_orders: usize,
  pub popular_color: Option<PopularColor>,
  pub color_distribution: FrequencyTable<Color>,
  pub size_distribution: FrequencyTable<Size>,
  pub sport_distribution: FrequencyTable<Sport>,
  pub jersey_type_distribution: FrequencyTable<JerseyType>,
}

impl AnalyticsReport {
  pub fn build(store: &OrderStore) -> Self {
    let color_distribution = color_distribution(store);
    let popular_color = color_distribution.mode().map(|(color, orders)| PopularColor {
      hex: color.as_str().to_string(),
      display: color.display_upper(),
      orders,
    });

    Self {
      total_orders: total_count(store),
      popular_color,
      color_distribution,
      size_distribution: size_distribution(store),
      sport_distribution: sport_distribution(store),
      jersey_type_distribution: jersey_type_distribution(store),
    }
  }

  /// True when there is nothing to chart yet.
  pub fn is_empty(&self) -> bool {
    self.total_orders == 0
  }
}
