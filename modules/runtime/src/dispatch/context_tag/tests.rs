use std::thread;

use super::ContextTag;

#[test]
fn no_tag_is_current_by_default() {
  thread::spawn(|| assert!(ContextTag::current().is_none())).join().unwrap();
}

#[test]
fn enter_sets_and_guard_restores() {
  let outer = ContextTag::new("outer");
  let _outer_guard = ContextTag::enter(outer.clone());
  {
    let _inner = ContextTag::enter(ContextTag::new("inner"));
    assert_eq!(ContextTag::current().unwrap().as_str(), "inner");
  }
  assert_eq!(ContextTag::current(), Some(outer));
}

#[test]
fn establish_none_clears_and_restores_the_current_tag() {
  let tag = ContextTag::new("driver");
  ContextTag::scope(tag.clone(), || {
    {
      let _guard = ContextTag::establish(None);
      assert!(ContextTag::current().is_none());
    }
    assert_eq!(ContextTag::current(), Some(tag.clone()));
  });
  assert!(ContextTag::current().is_none());
}

#[test]
fn tags_are_thread_local() {
  let _guard = ContextTag::enter(ContextTag::new("main"));
  let seen = thread::spawn(ContextTag::current).join().unwrap();
  assert!(seen.is_none());
}

#[test]
fn equality_compares_values() {
  assert_eq!(ContextTag::new("a"), ContextTag::new(String::from("a")));
  assert_ne!(ContextTag::new("a"), ContextTag::new("b"));
  assert_eq!(format!("{:?}", ContextTag::new("a")), "ContextTag(\"a\")");
}
