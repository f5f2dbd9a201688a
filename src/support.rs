//! # Customer Support Module
//!
//! Routes free-text support queries to a canned response by counting keyword
//! hits per category. Consumed by the support menu state's default handler.

use log::{info, warn};

/// Support categories recognized by keyword counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportCategory {
    Pedido,
    Producto,
    Pago,
    Envio,
    Horario,
    Reclamo,
    Default,
}

const CATEGORY_KEYWORDS: &[(SupportCategory, &[&str])] = &[
    (
        SupportCategory::Pedido,
        &[
            "pedido", "orden", "compra", "tracking", "seguimiento", "estado", "cancelar",
            "modificar", "cambiar",
        ],
    ),
    (
        SupportCategory::Producto,
        &[
            "producto", "calidad", "ingredientes", "alérgenos", "alergenos", "conservación",
            "conservacion", "caducidad", "vencimiento",
        ],
    ),
    (
        SupportCategory::Pago,
        &[
            "pago", "factura", "recibo", "tarjeta", "efectivo", "transferencia", "mercadopago",
            "reembolso", "devolucion", "devolución",
        ],
    ),
    (
        SupportCategory::Envio,
        &[
            "envío", "envio", "delivery", "entrega", "dirección", "direccion", "domicilio",
            "tiempo", "demora", "retraso",
        ],
    ),
    (
        SupportCategory::Horario,
        &[
            "horario", "abierto", "cerrado", "atención", "atencion", "disponibilidad", "días",
            "dias", "horas",
        ],
    ),
    (
        SupportCategory::Reclamo,
        &[
            "reclamo", "queja", "problema", "error", "incidencia", "incidente", "insatisfecho",
            "insatisfecha", "mal", "defectuoso",
        ],
    ),
];

fn category_response(category: SupportCategory) -> &'static str {
    match category {
        SupportCategory::Pedido => {
            "Entiendo que tienes una consulta sobre tu pedido. Para ayudarte mejor, necesito el número de pedido. Por favor, envíame el número que recibiste en tu confirmación de compra.\n\nSi no tienes el número, puedes proporcionarme la fecha aproximada y tu nombre completo para buscar tu pedido."
        }
        SupportCategory::Producto => {
            "Gracias por tu interés en nuestros productos. Todas nuestras milanesas son elaboradas con ingredientes frescos y de alta calidad. Si tienes alguna consulta específica sobre ingredientes, alérgenos o métodos de conservación, por favor háznoslo saber y te proporcionaremos la información detallada."
        }
        SupportCategory::Pago => {
            "Respecto a tu consulta sobre pagos, aceptamos múltiples formas de pago:\n- Efectivo (solo en entregas a domicilio)\n- Tarjetas de débito y crédito\n- Transferencia bancaria\n- MercadoPago\n\nSi tienes alguna consulta específica sobre facturación o reembolsos, por favor proporciona más detalles para poder ayudarte mejor."
        }
        SupportCategory::Envio => {
            "Sobre nuestro servicio de envío:\n- Realizamos entregas en toda la ciudad\n- El costo estándar es de $500\n- Envío gratis en compras superiores a $5000\n- Tiempo estimado de entrega: 30-45 minutos dependiendo de la zona\n\nSi necesitas información sobre el estado de tu envío, por favor proporciona tu número de pedido."
        }
        SupportCategory::Horario => {
            "Nuestro horario de atención es:\n- Lunes a viernes: 9:00 a 20:00 hs\n- Sábados: 9:00 a 14:00 hs\n- Domingos: Cerrado\n\nLos pedidos realizados fuera del horario de atención serán procesados al siguiente día hábil."
        }
        SupportCategory::Reclamo => {
            "Lamentamos mucho que hayas tenido un problema. Tu satisfacción es nuestra prioridad y queremos resolverlo lo antes posible.\n\nPor favor, describe detalladamente el inconveniente que tuviste, incluyendo el número de pedido si lo tienes disponible. Un representante de atención al cliente se pondrá en contacto contigo a la brevedad."
        }
        SupportCategory::Default => {
            "Gracias por contactar a nuestro servicio de atención al cliente. Estamos aquí para ayudarte con cualquier consulta o problema que tengas. Por favor, proporciona más detalles sobre tu consulta para que podamos asistirte mejor."
        }
    }
}

/// Detect the support category of a message by keyword counting.
///
/// Returns the best category and a confidence in `[0.1, 0.9]`; messages with
/// no keyword hit fall back to [`SupportCategory::Default`].
pub fn detect_support_category(message: &str) -> (SupportCategory, f64) {
    let message = message.to_lowercase();

    let mut best: Option<(SupportCategory, usize)> = None;
    for (category, keywords) in CATEGORY_KEYWORDS {
        let matches = keywords.iter().filter(|kw| message.contains(**kw)).count();
        if matches > 0 && best.map_or(true, |(_, n)| matches > n) {
            best = Some((*category, matches));
        }
    }

    match best {
        Some((category, matches)) => {
            let confidence = (0.3 + matches as f64 * 0.15).min(0.9);
            (category, confidence)
        }
        None => (SupportCategory::Default, 0.1),
    }
}

/// Canned support reply for a free-text query, with the menu footer appended.
pub fn support_response(message: &str) -> String {
    let (category, confidence) = detect_support_category(message);
    if category == SupportCategory::Default {
        warn!("support query without category match: {:.50}", message);
    } else {
        info!("support category {category:?} detected with confidence {confidence:.2}");
    }

    format!(
        "{}\n\nPara volver al menú principal, escribe 'menu' o 'volver'.",
        category_response(category)
    )
}
