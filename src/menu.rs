//! # Menu State Machine Module
//!
//! The hand-authored conversation tree: every state has a canned message, an
//! optional digit-keyed option table, an optional default handler for free
//! text, and at most one fixed parent for back navigation.
//!
//! Back navigation is a single fixed ancestor per state, never a stack: a
//! leaf reached through any path always returns to the same parent.

use log::{debug, warn};

use crate::constants::*;
use crate::support;

/// Outcome of a menu interaction: the text to send and the state to move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuReply {
    pub response: String,
    pub next_state: &'static str,
}

/// Option handlers produce the response text; the transition is declared on
/// the option entry itself.
type OptionHandler = fn(user_id: &str, input: &str) -> String;

/// Default handlers own both the response and the transition.
type DefaultHandler = fn(user_id: &str, input: &str) -> MenuReply;

/// One numbered entry in a state's option table.
pub struct MenuOption {
    pub digit: &'static str,
    pub next_state: &'static str,
    pub handler: Option<OptionHandler>,
}

/// A node of the static menu tree.
pub struct MenuStateDef {
    pub name: &'static str,
    /// Canned message shown when this state is (re-)entered.
    pub message: &'static str,
    pub options: &'static [MenuOption],
    pub default_handler: Option<DefaultHandler>,
    /// Fixed parent for back navigation; `None` only on the root.
    pub parent: Option<&'static str>,
}

fn handle_productos_milanesas(_user_id: &str, _input: &str) -> String {
    MENSAJE_PRODUCTOS_MILANESAS.to_string()
}

fn handle_productos_medallones(_user_id: &str, _input: &str) -> String {
    MENSAJE_PRODUCTOS_MEDALLONES.to_string()
}

fn handle_productos_rellenos(_user_id: &str, _input: &str) -> String {
    MENSAJE_PRODUCTOS_RELLENOS.to_string()
}

fn handle_productos_veggie(_user_id: &str, _input: &str) -> String {
    MENSAJE_PRODUCTOS_VEGGIE.to_string()
}

/// Free-text neighborhood check against the delivery allow-list. Either way
/// the conversation returns to the delivery submenu.
fn handle_zone_lookup(user_id: &str, input: &str) -> MenuReply {
    let normalized = input.trim().to_lowercase();
    let covered = ZONAS_ENTREGA.iter().any(|zona| normalized.contains(zona));
    debug!("zone lookup for {user_id}: '{normalized}' covered={covered}");

    let response = if covered {
        MENSAJE_ZONA_CUBIERTA
    } else {
        MENSAJE_ZONA_NO_CUBIERTA
    };
    MenuReply {
        response: response.to_string(),
        next_state: ESTADO_MENU_ENVIOS,
    }
}

/// Free-text support queries route through category detection and stay in
/// the support state.
fn handle_support_query(_user_id: &str, input: &str) -> MenuReply {
    MenuReply {
        response: support::support_response(input),
        next_state: ESTADO_MENU_ATENCION,
    }
}

static MENU_STATES: &[MenuStateDef] = &[
    MenuStateDef {
        name: ESTADO_MENU_PRINCIPAL,
        message: MENSAJE_MENU_PRINCIPAL,
        options: &[
            MenuOption { digit: "1", next_state: ESTADO_MENU_PRODUCTOS, handler: None },
            MenuOption { digit: "2", next_state: ESTADO_MENU_ENVIOS, handler: None },
            MenuOption { digit: "3", next_state: ESTADO_MENU_MANIPULACION, handler: None },
            MenuOption { digit: "4", next_state: ESTADO_MENU_RECETAS, handler: None },
            MenuOption { digit: "5", next_state: ESTADO_MENU_ATENCION, handler: None },
        ],
        default_handler: None,
        parent: None,
    },
    MenuStateDef {
        name: ESTADO_MENU_PRODUCTOS,
        message: MENSAJE_MENU_PRODUCTOS,
        options: &[
            MenuOption { digit: "1", next_state: ESTADO_PRODUCTOS_MILANESAS, handler: Some(handle_productos_milanesas) },
            MenuOption { digit: "2", next_state: ESTADO_PRODUCTOS_MEDALLONES, handler: Some(handle_productos_medallones) },
            MenuOption { digit: "3", next_state: ESTADO_PRODUCTOS_RELLENOS, handler: Some(handle_productos_rellenos) },
            MenuOption { digit: "4", next_state: ESTADO_PRODUCTOS_VEGGIE, handler: Some(handle_productos_veggie) },
        ],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRINCIPAL),
    },
    MenuStateDef {
        name: ESTADO_PRODUCTOS_MILANESAS,
        message: MENSAJE_PRODUCTOS_MILANESAS,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRODUCTOS),
    },
    MenuStateDef {
        name: ESTADO_PRODUCTOS_MEDALLONES,
        message: MENSAJE_PRODUCTOS_MEDALLONES,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRODUCTOS),
    },
    MenuStateDef {
        name: ESTADO_PRODUCTOS_RELLENOS,
        message: MENSAJE_PRODUCTOS_RELLENOS,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRODUCTOS),
    },
    MenuStateDef {
        name: ESTADO_PRODUCTOS_VEGGIE,
        message: MENSAJE_PRODUCTOS_VEGGIE,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRODUCTOS),
    },
    MenuStateDef {
        name: ESTADO_MENU_ENVIOS,
        message: MENSAJE_MENU_ENVIOS,
        options: &[
            MenuOption { digit: "1", next_state: ESTADO_ENVIOS_ZONA, handler: None },
            MenuOption { digit: "2", next_state: ESTADO_ENVIOS_COSTOS, handler: None },
            MenuOption { digit: "3", next_state: ESTADO_ENVIOS_HORARIOS, handler: None },
        ],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRINCIPAL),
    },
    MenuStateDef {
        name: ESTADO_ENVIOS_ZONA,
        message: MENSAJE_ENVIOS_ZONA,
        options: &[],
        default_handler: Some(handle_zone_lookup),
        parent: Some(ESTADO_MENU_ENVIOS),
    },
    MenuStateDef {
        name: ESTADO_ENVIOS_COSTOS,
        message: MENSAJE_ENVIOS_COSTOS,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_ENVIOS),
    },
    MenuStateDef {
        name: ESTADO_ENVIOS_HORARIOS,
        message: MENSAJE_ENVIOS_HORARIOS,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_ENVIOS),
    },
    MenuStateDef {
        name: ESTADO_MENU_MANIPULACION,
        message: MENSAJE_MENU_MANIPULACION,
        options: &[
            MenuOption { digit: "1", next_state: ESTADO_MANIPULACION_CONSERVACION, handler: None },
            MenuOption { digit: "2", next_state: ESTADO_MANIPULACION_COCCION, handler: None },
            MenuOption { digit: "3", next_state: ESTADO_MANIPULACION_DESCONGELADO, handler: None },
        ],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRINCIPAL),
    },
    MenuStateDef {
        name: ESTADO_MANIPULACION_CONSERVACION,
        message: MENSAJE_MANIPULACION_CONSERVACION,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_MANIPULACION),
    },
    MenuStateDef {
        name: ESTADO_MANIPULACION_COCCION,
        message: MENSAJE_MANIPULACION_COCCION,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_MANIPULACION),
    },
    MenuStateDef {
        name: ESTADO_MANIPULACION_DESCONGELADO,
        message: MENSAJE_MANIPULACION_DESCONGELADO,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_MANIPULACION),
    },
    MenuStateDef {
        name: ESTADO_MENU_RECETAS,
        message: MENSAJE_MENU_RECETAS,
        options: &[
            MenuOption { digit: "1", next_state: ESTADO_RECETA_NAPOLITANA, handler: None },
            MenuOption { digit: "2", next_state: ESTADO_RECETA_SANDWICH, handler: None },
            MenuOption { digit: "3", next_state: ESTADO_RECETA_HORNO, handler: None },
        ],
        default_handler: None,
        parent: Some(ESTADO_MENU_PRINCIPAL),
    },
    MenuStateDef {
        name: ESTADO_RECETA_NAPOLITANA,
        message: MENSAJE_RECETA_NAPOLITANA,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_RECETAS),
    },
    MenuStateDef {
        name: ESTADO_RECETA_SANDWICH,
        message: MENSAJE_RECETA_SANDWICH,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_RECETAS),
    },
    MenuStateDef {
        name: ESTADO_RECETA_HORNO,
        message: MENSAJE_RECETA_HORNO,
        options: &[],
        default_handler: None,
        parent: Some(ESTADO_MENU_RECETAS),
    },
    MenuStateDef {
        name: ESTADO_MENU_ATENCION,
        message: MENSAJE_MENU_ATENCION,
        options: &[],
        default_handler: Some(handle_support_query),
        parent: Some(ESTADO_MENU_PRINCIPAL),
    },
];

/// Look up a state definition by name.
pub fn state_def(name: &str) -> Option<&'static MenuStateDef> {
    MENU_STATES.iter().find(|s| s.name == name)
}

/// All states, for table invariants in tests.
pub fn all_states() -> &'static [MenuStateDef] {
    MENU_STATES
}

/// Whether the trimmed, case-folded input is an exact back command.
pub fn is_back_command(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    PALABRAS_VOLVER.iter().any(|token| normalized == *token)
}

/// Whether the trimmed input is purely numeric.
pub fn is_numeric_input(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Back navigation: move to the state's fixed parent and replay its canned
/// message. States without a parent entry (the root, or an unknown state
/// name) reset to the main menu.
pub fn handle_back(current_state: &str) -> MenuReply {
    let parent = state_def(current_state).and_then(|def| def.parent);

    match parent.and_then(state_def) {
        Some(parent_def) => MenuReply {
            response: parent_def.message.to_string(),
            next_state: parent_def.name,
        },
        None => {
            if state_def(current_state).is_none() {
                warn!("back navigation from unknown state '{current_state}', resetting to root");
            }
            MenuReply {
                response: MENSAJE_MENU_PRINCIPAL.to_string(),
                next_state: ESTADO_MENU_PRINCIPAL,
            }
        }
    }
}

/// Numeric option handling for the current state.
///
/// The option table of the current state is authoritative: ancestors are
/// never searched, so the same digit can mean different things in unrelated
/// submenus. Unknown digits go to the state's default handler when present,
/// otherwise to the canned "option not available" message without a state
/// change.
pub fn handle_numeric(user_id: &str, current_state: &str, input: &str) -> MenuReply {
    let digit = input.trim();
    let def = match state_def(current_state) {
        Some(def) => def,
        None => {
            warn!("numeric input from unknown state '{current_state}', resetting to root");
            return MenuReply {
                response: MENSAJE_MENU_PRINCIPAL.to_string(),
                next_state: ESTADO_MENU_PRINCIPAL,
            };
        }
    };

    if let Some(option) = def.options.iter().find(|o| o.digit == digit) {
        let response = match option.handler {
            Some(handler) => handler(user_id, input),
            // Transition without a handler answers with the target's message
            None => state_def(option.next_state)
                .map(|next| next.message.to_string())
                .unwrap_or_else(|| MENSAJE_OPCION_NO_DISPONIBLE.to_string()),
        };
        debug!("user {user_id}: option {digit} in '{current_state}' -> '{}'", option.next_state);
        return MenuReply {
            response,
            next_state: option.next_state,
        };
    }

    if let Some(handler) = def.default_handler {
        return handler(user_id, input);
    }

    debug!("user {user_id}: option {digit} not available in '{current_state}'");
    MenuReply {
        response: MENSAJE_OPCION_NO_DISPONIBLE.to_string(),
        next_state: def.name,
    }
}

/// Run the current state's default handler on free text, when it has one.
pub fn default_reply(user_id: &str, current_state: &str, input: &str) -> Option<MenuReply> {
    let def = state_def(current_state)?;
    let handler = def.default_handler?;
    Some(handler(user_id, input))
}
