//! Lista ordenada con deduplicación por clave.
//!
//! Es la estructura detrás de playlists y favoritos: orden de inserción,
//! append en cola, borrado por clave en cualquier posición. La clave de
//! identidad se inyecta como función en el constructor (playlist → id,
//! favoritos → par título/artista) en vez de fijarla en la estructura.

/// Nodo de la lista simplemente enlazada.
#[derive(Debug, Clone)]
struct Node<T> {
  item: T,
  next: Option<Box<Node<T>>>,
}

/// Secuencia con orden de inserción, sin claves repetidas.
///
/// Las operaciones dominantes son append al final y borrado por clave en
/// medio; ningún consumidor indexa al azar, así que los nodos enlazados
/// alcanzan. Toda mutación deja la lista consistente aunque falle la
/// condición (sin enlaces colgantes ni claves duplicadas).
#[derive(Debug, Clone)]
pub struct OrderedList<T, K> {
  head: Option<Box<Node<T>>>,
  len: usize,
  key_of: fn(&T) -> K,
}

impl<T, K: PartialEq> OrderedList<T, K> {
  pub fn new(key_of: fn(&T) -> K) -> Self {
    OrderedList { head: None, len: 0, key_of }
  }

  /// Agrega `item` al final sólo si su clave no está ya en la lista.
  /// Devuelve `false` (sin efectos) cuando la clave ya existía.
  pub fn append(&mut self, item: T) -> bool {
    let key = (self.key_of)(&item);

    let mut cursor = &mut self.head;
    while let Some(node) = cursor {
      if (self.key_of)(&node.item) == key {
        return false;
      }
      cursor = &mut node.next;
    }

    *cursor = Some(Box::new(Node { item, next: None }));
    self.len += 1;
    true
  }

  /// Desenlaza el primer nodo cuya clave coincida. `false` si no estaba.
  pub fn remove_by_key(&mut self, key: &K) -> bool {
    let mut cursor = &mut self.head;
    loop {
      match cursor {
        None => return false,
        Some(node) if (self.key_of)(&node.item) == *key => break,
        Some(node) => cursor = &mut node.next,
      }
    }

    if let Some(node) = cursor.take() {
      *cursor = node.next;
      self.len -= 1;
    }
    true
  }

  pub fn contains(&self, key: &K) -> bool {
    self.iter().any(|item| (self.key_of)(item) == *key)
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter { next: self.head.as_deref() }
  }

  /// Snapshot materializado de cabeza a cola; no comparte estructura
  /// mutable con los nodos internos.
  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone,
  {
    self.iter().cloned().collect()
  }
}

pub struct Iter<'a, T> {
  next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.next.map(|node| {
      self.next = node.next.as_deref();
      &node.item
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, PartialEq)]
  struct Entry {
    id: u32,
    label: &'static str,
  }

  fn entry_key(e: &Entry) -> u32 {
    e.id
  }

  fn list_with(ids: &[(u32, &'static str)]) -> OrderedList<Entry, u32> {
    let mut list = OrderedList::new(entry_key);
    for (id, label) in ids {
      assert!(list.append(Entry { id: *id, label }));
    }
    list
  }

  #[test]
  fn append_preserves_insertion_order() {
    let list = list_with(&[(1, "x"), (2, "y"), (3, "z")]);
    let labels: Vec<_> = list.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["x", "y", "z"]);
    assert_eq!(list.len(), 3);
  }

  #[test]
  fn append_duplicate_key_is_rejected() {
    let mut list = list_with(&[(1, "x")]);
    assert!(!list.append(Entry { id: 1, label: "otro" }));
    assert_eq!(list.len(), 1);
    assert_eq!(list.iter().next().map(|e| e.label), Some("x"));
  }

  #[test]
  fn remove_middle_relinks_neighbors() {
    let mut list = list_with(&[(1, "x"), (2, "y"), (3, "z")]);

    assert!(list.remove_by_key(&2));
    let labels: Vec<_> = list.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["x", "z"]);

    // segundo borrado de la misma clave: no-op señalado con false
    assert!(!list.remove_by_key(&2));
    assert_eq!(list.len(), 2);
  }

  #[test]
  fn remove_head_updates_head() {
    let mut list = list_with(&[(1, "x"), (2, "y")]);
    assert!(list.remove_by_key(&1));
    assert_eq!(list.iter().next().map(|e| e.id), Some(2));
  }

  #[test]
  fn remove_tail_and_reappend() {
    let mut list = list_with(&[(1, "x"), (2, "y")]);
    assert!(list.remove_by_key(&2));
    assert!(list.append(Entry { id: 2, label: "y2" }));
    let labels: Vec<_> = list.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["x", "y2"]);
  }

  #[test]
  fn remove_on_empty_returns_false() {
    let mut list: OrderedList<Entry, u32> = OrderedList::new(entry_key);
    assert!(!list.remove_by_key(&7));
    assert!(list.is_empty());
  }

  #[test]
  fn contains_and_to_vec() {
    let list = list_with(&[(1, "x"), (2, "y")]);
    assert!(list.contains(&1));
    assert!(!list.contains(&9));

    let snapshot = list.to_vec();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].id, 2);
  }
}
