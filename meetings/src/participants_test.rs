use super::*;

fn person(name: &str, position: &str) -> Participant {
    Participant { name: name.to_owned(), position: position.to_owned() }
}

#[test]
fn appended_adds_to_end_and_leaves_input_alone() {
    let list = vec![person("Ann", "PM")];
    let next = appended(&list, person("Bo", "Dev"));
    assert_eq!(next, vec![person("Ann", "PM"), person("Bo", "Dev")]);
    assert_eq!(list.len(), 1);
}

#[test]
fn removed_at_drops_only_that_position() {
    let list = vec![person("Ann", "PM"), person("Ann", "PM"), person("Cy", "QA")];
    let next = removed_at(&list, 1);
    assert_eq!(next, vec![person("Ann", "PM"), person("Cy", "QA")]);
}

#[test]
fn removed_at_out_of_range_is_a_copy() {
    let list = vec![person("Ann", "PM")];
    assert_eq!(removed_at(&list, 5), list);
    assert!(removed_at(&[], 0).is_empty());
}
