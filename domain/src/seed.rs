//! Records every seeded store starts with.

use crate::User;

/// The fixed users a freshly seeded store holds, in insertion order.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Oussama", "Souissi"),
        User::new(2, "Hamdi", "Jouini"),
        User::new(3, "Khalil", "Arfaoui"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_one_to_three_in_order() {
        let ids: Vec<i32> = default_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn seed_names() {
        let users = default_users();
        assert_eq!(users[0], User::new(1, "Oussama", "Souissi"));
        assert_eq!(users[1], User::new(2, "Hamdi", "Jouini"));
        assert_eq!(users[2], User::new(3, "Khalil", "Arfaoui"));
    }
}
