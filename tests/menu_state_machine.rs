mod common;

use chefmenu::menu::{
    Course, CourseFilter, Draft, DraftField, ItemId, MenuStateMachine, Screen, ValidationError,
};
use common::{draft, soup_and_steak};

fn names_in(machine: &MenuStateMachine, course: Course) -> Vec<String> {
    machine
        .group_by_course()
        .into_iter()
        .find(|group| group.course == course)
        .map(|group| group.items.iter().map(|item| item.name.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn added_item_lands_once_at_end_of_its_course() {
    let (mut machine, _, _) = soup_and_steak();
    let salad = machine
        .add_item(draft("Salad", "Green", Course::Starters, "4"))
        .unwrap();

    assert_eq!(names_in(&machine, Course::Starters), vec!["Soup", "Salad"]);
    let occurrences = machine
        .group_by_course()
        .iter()
        .flat_map(|group| group.items.iter())
        .filter(|item| item.id == salad.id)
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn add_item_returns_to_home_and_resets_draft() {
    let mut machine = MenuStateMachine::new();
    machine.navigate(Screen::AddItem);
    machine.draft_mut().name.push_str("typed");
    machine
        .add_item(draft("Soup", "Hot", Course::Starters, "5.50"))
        .unwrap();
    assert_eq!(machine.screen(), Screen::Home);
    assert_eq!(machine.draft(), &Draft::default());
}

#[test]
fn empty_fields_fail_with_missing_field() {
    let (mut machine, _, _) = soup_and_steak();
    let before = machine.items().clone();

    let cases = [
        (draft("", "Hot", Course::Starters, "5"), DraftField::Name),
        (draft("Soup", "", Course::Starters, "5"), DraftField::Description),
        (draft("Soup", "Hot", Course::Starters, ""), DraftField::Price),
    ];
    for (input, field) in cases {
        assert_eq!(
            machine.add_item(input),
            Err(ValidationError::MissingField(field))
        );
        assert_eq!(machine.items(), &before);
    }
}

#[test]
fn bad_prices_fail_with_invalid_price() {
    let (mut machine, _, _) = soup_and_steak();
    let before = machine.items().clone();
    for price in ["0", "-5", "abc"] {
        assert_eq!(
            machine.add_item(draft("Soup", "Hot", Course::Starters, price)),
            Err(ValidationError::InvalidPrice),
            "price {price:?}"
        );
        assert_eq!(machine.items(), &before);
    }
}

#[test]
fn price_text_keeps_leading_number() {
    let mut machine = MenuStateMachine::new();
    for (price, expected) in [("5abc", 5.0), ("12,50", 12.0), ("7 euros", 7.0)] {
        let item = machine
            .add_item(draft("Soup", "Hot", Course::Starters, price))
            .unwrap();
        assert_eq!(item.price, expected, "price {price:?}");
    }
    assert_eq!(machine.items().len(), 3);
}

#[test]
fn validation_messages() {
    assert_eq!(
        ValidationError::MissingField(DraftField::Name).to_string(),
        "Please fill in all fields"
    );
    assert_eq!(
        ValidationError::InvalidPrice.to_string(),
        "Please enter a valid price"
    );
}

#[test]
fn delete_is_idempotent() {
    let (mut machine, soup, _) = soup_and_steak();
    machine.delete_item(soup.id);
    let once = machine.clone();
    machine.delete_item(soup.id);
    assert_eq!(machine, once);
    assert_eq!(machine.len(), 1);
}

#[test]
fn delete_unknown_id_keeps_items() {
    let (mut machine, soup, steak) = soup_and_steak();
    machine.navigate(Screen::Filter);
    machine.delete_item(ItemId::new(999));
    assert_eq!(machine.len(), 2);
    assert!(machine.items().contains(soup.id));
    assert!(machine.items().contains(steak.id));
    assert_eq!(machine.screen(), Screen::Filter);
}

#[test]
fn averages_for_soup_and_steak() {
    let (machine, _, _) = soup_and_steak();
    assert_eq!(machine.average_price(Course::Starters), 5.50);
    assert_eq!(machine.average_price(Course::Mains), 20.00);
    assert_eq!(machine.average_price(Course::Dessert), 0.0);
}

#[test]
fn filtered_view_keeps_empty_selected_course() {
    let (mut machine, _, _) = soup_and_steak();
    machine.set_filter(CourseFilter::Only(Course::Dessert));

    let filtered = machine.filtered_group_by_course();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].course, Course::Dessert);
    assert!(filtered[0].items.is_empty());

    let all = machine.group_by_course();
    assert!(all.iter().all(|group| group.course != Course::Dessert));
}

#[test]
fn all_filter_matches_unfiltered_view() {
    let (mut machine, _, _) = soup_and_steak();
    machine.set_filter(CourseFilter::All);
    assert_eq!(machine.filtered_group_by_course(), machine.group_by_course());
}

#[test]
fn group_order_follows_first_occurrence() {
    let mut machine = MenuStateMachine::new();
    machine
        .add_item(draft("Cola", "Cold", Course::Drinks, "2"))
        .unwrap();
    machine
        .add_item(draft("Cake", "Sweet", Course::Dessert, "6"))
        .unwrap();
    machine
        .add_item(draft("Soup", "Hot", Course::Starters, "5"))
        .unwrap();
    let order: Vec<_> = machine
        .group_by_course()
        .iter()
        .map(|group| group.course)
        .collect();
    assert_eq!(order, vec![Course::Drinks, Course::Dessert, Course::Starters]);
}

#[test]
fn entering_add_screen_resets_draft() {
    let mut machine = MenuStateMachine::new();
    machine.draft_mut().name.push_str("stale");
    machine.navigate(Screen::AddItem);
    assert_eq!(machine.draft(), &Draft::default());
}

#[test]
fn submit_draft_uses_form_contents() {
    let mut machine = MenuStateMachine::new();
    machine.navigate(Screen::AddItem);
    {
        let form = machine.draft_mut();
        form.name.push_str("Cake");
        form.description.push_str("Sweet");
        form.course = Course::Dessert;
        form.price.push_str("6.25");
    }
    let item = machine.submit_draft().unwrap();
    assert_eq!(item.course, Course::Dessert);
    assert_eq!(item.price, 6.25);
    assert_eq!(machine.screen(), Screen::Home);
}

#[test]
fn stats_report_every_course() {
    let (machine, _, _) = soup_and_steak();
    let stats = machine.stats();
    assert_eq!(stats.total_items, 2);
    let courses: Vec<_> = stats.averages.iter().map(|(course, _)| *course).collect();
    assert_eq!(courses, Course::ALL.to_vec());
}
