//! Insertion-ordered item storage and the views derived from it.

use crate::menu::course::Course;
use crate::menu::item::{ItemId, MenuItem};

/// Items of one course, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseGroup<'a> {
    pub course: Course,
    pub items: Vec<&'a MenuItem>,
}

/// Aggregates shown on the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStats {
    pub total_items: usize,
    /// Average price for every course, in `Course::ALL` order.
    pub averages: Vec<(Course, f64)>,
}

/// Menu items in the order they were added. Ids are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuCollection {
    items: Vec<MenuItem>,
}

impl MenuCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. Callers hand out ids; a duplicate id is rejected.
    pub fn push(&mut self, item: MenuItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the item with `id`, if any.
    pub fn remove(&mut self, id: ItemId) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Items of a single course, in insertion order.
    pub fn in_course(&self, course: Course) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.course == course).collect()
    }

    /// Groups items by course. Groups appear in the order their course
    /// first occurs among the items; empty courses are left out.
    pub fn group_by_course(&self) -> Vec<CourseGroup<'_>> {
        let mut groups: Vec<CourseGroup<'_>> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|group| group.course == item.course) {
                Some(group) => group.items.push(item),
                None => groups.push(CourseGroup {
                    course: item.course,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    /// Mean price of a course; 0.0 when the course has no items.
    pub fn average_price(&self, course: Course) -> f64 {
        let (count, total) = self
            .items
            .iter()
            .filter(|item| item.course == course)
            .fold((0usize, 0.0f64), |(count, total), item| {
                (count + 1, total + item.price)
            });
        if count == 0 {
            return 0.0;
        }
        total / count as f64
    }

    pub fn stats(&self) -> MenuStats {
        MenuStats {
            total_items: self.items.len(),
            averages: Course::ALL
                .iter()
                .map(|course| (*course, self.average_price(*course)))
                .collect(),
        }
    }
}
