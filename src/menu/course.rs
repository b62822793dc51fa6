use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a menu item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Dessert,
    Drinks,
}

impl Course {
    /// Every course, in picker order.
    pub const ALL: [Course; 4] = [
        Course::Starters,
        Course::Mains,
        Course::Dessert,
        Course::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
            Course::Drinks => "Drinks",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next course in picker order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous course in picker order, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course filter on the Filter screen: everything, or a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Picker options: "All" first, then each course.
    pub const OPTIONS: [CourseFilter; 5] = [
        CourseFilter::All,
        CourseFilter::Only(Course::Starters),
        CourseFilter::Only(Course::Mains),
        CourseFilter::Only(Course::Dessert),
        CourseFilter::Only(Course::Drinks),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All Courses",
            CourseFilter::Only(course) => course.as_str(),
        }
    }

    fn index(self) -> usize {
        Self::OPTIONS.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::OPTIONS[(self.index() + 1) % Self::OPTIONS.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.index() + len - 1) % len]
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}
