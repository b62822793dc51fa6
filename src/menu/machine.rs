//! The menu session: items, current screen, form draft and filter.

use crate::menu::collection::{CourseGroup, MenuCollection, MenuStats};
use crate::menu::course::{Course, CourseFilter};
use crate::menu::draft::Draft;
use crate::menu::error::ValidationError;
use crate::menu::item::{ItemId, MenuItem};

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    AddItem,
    Filter,
}

/// Owns all session state. Single writer; every derived view is
/// recomputed from the current items on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStateMachine {
    items: MenuCollection,
    screen: Screen,
    draft: Draft,
    filter: CourseFilter,
    next_id: u64,
}

impl Default for MenuStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStateMachine {
    pub fn new() -> Self {
        Self {
            items: MenuCollection::new(),
            screen: Screen::Home,
            draft: Draft::default(),
            filter: CourseFilter::All,
            next_id: 1,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn items(&self) -> &MenuCollection {
        &self.items
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Form input access for the presentation layer.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn filter(&self) -> CourseFilter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates `draft` and appends it as a new item.
    ///
    /// On success the draft is cleared and the screen returns to Home.
    /// On failure nothing changes.
    pub fn add_item(&mut self, draft: Draft) -> Result<MenuItem, ValidationError> {
        let price = match draft.validate() {
            Ok(price) => price,
            Err(err) => {
                tracing::warn!(error = ?err, "Rejected menu item");
                return Err(err);
            }
        };

        let item = MenuItem {
            id: self.allocate_id(),
            name: draft.name,
            description: draft.description,
            course: draft.course,
            price,
        };
        self.items.push(item.clone());
        self.draft = Draft::default();
        self.screen = Screen::Home;

        tracing::info!(
            id = item.id.get(),
            course = %item.course,
            price = item.price,
            "Added menu item '{}'",
            item.name
        );
        Ok(item)
    }

    /// Commits the form currently being edited.
    pub fn submit_draft(&mut self) -> Result<MenuItem, ValidationError> {
        let draft = self.draft.clone();
        self.add_item(draft)
    }

    /// Removes an item. Unknown ids are ignored.
    pub fn delete_item(&mut self, id: ItemId) {
        match self.items.remove(id) {
            Some(item) => tracing::info!(id = id.get(), "Deleted menu item '{}'", item.name),
            None => tracing::debug!(id = id.get(), "Delete ignored, no such item"),
        }
    }

    pub fn set_filter(&mut self, filter: CourseFilter) {
        tracing::debug!(filter = filter.label(), "Filter changed");
        self.filter = filter;
    }

    /// Switches screens. The draft is cleared whenever the add form is
    /// entered or left; the filter selection is kept.
    pub fn navigate(&mut self, target: Screen) {
        if target == Screen::AddItem || self.screen == Screen::AddItem {
            self.draft = Draft::default();
        }
        tracing::debug!(from = ?self.screen, to = ?target, "Navigate");
        self.screen = target;
    }

    pub fn group_by_course(&self) -> Vec<CourseGroup<'_>> {
        self.items.group_by_course()
    }

    /// Grouped items under the current filter. A selected course is always
    /// present in the result, even with no items.
    pub fn filtered_group_by_course(&self) -> Vec<CourseGroup<'_>> {
        match self.filter {
            CourseFilter::All => self.group_by_course(),
            CourseFilter::Only(course) => vec![CourseGroup {
                course,
                items: self.items.in_course(course),
            }],
        }
    }

    pub fn average_price(&self, course: Course) -> f64 {
        self.items.average_price(course)
    }

    pub fn stats(&self) -> MenuStats {
        self.items.stats()
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
