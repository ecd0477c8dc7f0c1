use kennel_core::{Dog, Kennel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_n_birthdays_add_n(age in 0u32..1_000_000, n in 0u32..500) {
        let mut dog = Dog::new("Rex", age);
        for _ in 0..n {
            dog.birthday();
        }
        prop_assert_eq!(dog.age(), age + n);
    }

    #[test]
    fn prop_kennel_birthdays_match_dog(age in 0u32..1_000_000, n in 0u32..500) {
        let mut kennel = Kennel::new();
        let id = kennel.adopt("Rex", age);
        prop_assert_eq!(kennel.birthdays(id, n).unwrap(), age + n);
    }

    #[test]
    fn prop_age_never_decreases(age in any::<u32>(), n in 0u32..64) {
        let mut dog = Dog::new("Rex", age);
        let mut last = dog.age();
        for _ in 0..n {
            let next = dog.birthday();
            prop_assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn prop_info_contains_name_and_age(name in "[A-Za-z ]{0,16}", age in any::<u32>()) {
        let dog = Dog::new(name.clone(), age);
        prop_assert_eq!(dog.info(), format!("{name} is {age} year(s) old."));
        prop_assert_eq!(dog.bark(), "bark bark!");
    }

    #[test]
    fn prop_set_buddy_touches_only_named_pair(
        ops in prop::collection::vec((0usize..5, 0usize..5), 0..32)
    ) {
        let mut kennel = Kennel::new();
        let ids: Vec<_> = (0..5).map(|i| kennel.adopt(format!("dog{i}"), 1)).collect();

        for (a, b) in ops {
            let before: Vec<_> = ids.iter().map(|&id| kennel.buddy_of(id).unwrap()).collect();
            kennel.set_buddy(ids[a], ids[b]).unwrap();
            prop_assert_eq!(kennel.buddy_of(ids[a]).unwrap(), Some(ids[b]));
            prop_assert_eq!(kennel.buddy_of(ids[b]).unwrap(), Some(ids[a]));

            for (i, &id) in ids.iter().enumerate() {
                if i != a && i != b {
                    prop_assert_eq!(kennel.buddy_of(id).unwrap(), before[i]);
                }
            }
        }
    }

    #[test]
    fn prop_birthdays_match_repeated_birthday(age in any::<u32>(), n in 0u32..256) {
        let mut stepped = Dog::new("Rex", age);
        for _ in 0..n {
            stepped.birthday();
        }
        let mut bulk = Dog::new("Rex", age);
        prop_assert_eq!(bulk.birthdays(n), stepped.age());
    }
}
