#[cfg(test)]
mod tests {
    use breaders_bot::constants::{
        ESTADO_MENU_PRINCIPAL, MENSAJE_MENU_PRINCIPAL, MENSAJE_OPCION_NO_DISPONIBLE,
    };
    use breaders_bot::menu::{all_states, handle_back, handle_numeric, state_def};

    const USER: &str = "+5491112345678";

    #[test]
    fn test_full_descent_and_return() {
        // Root -> recipes -> a recipe leaf, then back twice to the root
        let to_recipes = handle_numeric(USER, ESTADO_MENU_PRINCIPAL, "4");
        let to_leaf = handle_numeric(USER, to_recipes.next_state, "1");

        let back_once = handle_back(to_leaf.next_state);
        assert_eq!(back_once.next_state, to_recipes.next_state);
        assert_eq!(back_once.response, state_def(to_recipes.next_state).unwrap().message);

        let back_twice = handle_back(back_once.next_state);
        assert_eq!(back_twice.next_state, ESTADO_MENU_PRINCIPAL);
        assert_eq!(back_twice.response, MENSAJE_MENU_PRINCIPAL);
    }

    #[test]
    fn test_back_is_independent_of_entry_path() {
        // However a state is reached, back lands on the same fixed parent
        for state in all_states() {
            if let Some(parent) = state.parent {
                let reply = handle_back(state.name);
                assert_eq!(reply.next_state, parent);
            }
        }
    }

    #[test]
    fn test_every_state_rejects_foreign_digits_deterministically() {
        for state in all_states() {
            // Skip states whose free text goes through a default handler
            if state.default_handler.is_some() {
                continue;
            }
            let reply = handle_numeric(USER, state.name, "9");
            assert_eq!(
                reply.response, MENSAJE_OPCION_NO_DISPONIBLE,
                "state '{}' should reject option 9",
                state.name
            );
            assert_eq!(reply.next_state, state.name);
        }
    }

    #[test]
    fn test_option_replay_is_idempotent_everywhere() {
        for state in all_states() {
            for option in state.options {
                let first = handle_numeric(USER, state.name, option.digit);
                let second = handle_numeric(USER, state.name, option.digit);
                assert_eq!(first, second);
                assert_eq!(first.next_state, option.next_state);
            }
        }
    }

    #[test]
    fn test_handlerless_options_reply_with_target_message() {
        for state in all_states() {
            for option in state.options.iter().filter(|o| o.handler.is_none()) {
                let reply = handle_numeric(USER, state.name, option.digit);
                let target = state_def(option.next_state).unwrap();
                assert_eq!(reply.response, target.message);
            }
        }
    }
}
