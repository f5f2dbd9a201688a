//! # Constants Module
//!
//! Canned messages, keyword groups and state names used by the conversation
//! handlers. All user-facing text is Spanish and pre-authored; handlers never
//! generate prose.

// State names
pub const ESTADO_MENU_PRINCIPAL: &str = "menu_principal";
pub const ESTADO_MENU_PRODUCTOS: &str = "menu_productos";
pub const ESTADO_PRODUCTOS_MILANESAS: &str = "productos_milanesas";
pub const ESTADO_PRODUCTOS_MEDALLONES: &str = "productos_medallones";
pub const ESTADO_PRODUCTOS_RELLENOS: &str = "productos_rellenos";
pub const ESTADO_PRODUCTOS_VEGGIE: &str = "productos_veggie";
pub const ESTADO_MENU_ENVIOS: &str = "menu_envios";
pub const ESTADO_ENVIOS_ZONA: &str = "envios_zona";
pub const ESTADO_ENVIOS_COSTOS: &str = "envios_costos";
pub const ESTADO_ENVIOS_HORARIOS: &str = "envios_horarios";
pub const ESTADO_MENU_MANIPULACION: &str = "menu_manipulacion";
pub const ESTADO_MANIPULACION_CONSERVACION: &str = "manipulacion_conservacion";
pub const ESTADO_MANIPULACION_COCCION: &str = "manipulacion_coccion";
pub const ESTADO_MANIPULACION_DESCONGELADO: &str = "manipulacion_descongelado";
pub const ESTADO_MENU_RECETAS: &str = "menu_recetas";
pub const ESTADO_RECETA_NAPOLITANA: &str = "receta_napolitana";
pub const ESTADO_RECETA_SANDWICH: &str = "receta_sandwich";
pub const ESTADO_RECETA_HORNO: &str = "receta_horno";
pub const ESTADO_MENU_ATENCION: &str = "menu_atencion";

// Confidence thresholds for intent classification
pub const INTENT_ALTA_CONFIANZA: f64 = 0.85;
pub const INTENT_MEDIA_CONFIANZA: f64 = 0.65;
pub const INTENT_BAJA_CONFIANZA: f64 = 0.40;

/// Back-navigation command tokens. Matched by exact equality on the trimmed,
/// case-folded input, never by substring.
pub const PALABRAS_VOLVER: &[&str] = &["volver", "atras", "atrás", "regresar", "menu", "menú"];

// Keyword groups for intent recognition
pub const PALABRAS_SALUDO: &[&str] = &[
    "hola",
    "buen día",
    "buen dia",
    "buenos días",
    "buenos dias",
    "buenas tardes",
    "buenas noches",
    "qué tal",
    "que tal",
    "cómo va",
    "como va",
    "qué onda",
    "que onda",
    "holis",
    "saludos",
];

pub const PALABRAS_VER_PRODUCTOS: &[&str] = &[
    "ver producto",
    "ver productos",
    "productos",
    "catalogo",
    "catálogo",
    "milanesas",
    "que tenés para vender",
    "que tenes para vender",
    "mostrame los productos",
    "quiero ver productos",
    "quisiera ver productos",
    "menú de productos",
    "menu de productos",
    "que vendés",
    "que vendes",
    "mostrame las opciones",
];

pub const PALABRAS_HACER_PEDIDO: &[&str] = &[
    "hacer pedido",
    "hacer un pedido",
    "quiero comprar",
    "quisiera comprar",
    "quiero pedir",
    "quisiera pedir",
    "quiero ordenar",
    "quisiera ordenar",
    "realizar pedido",
    "realizar compra",
    "me gustaría comprar",
    "me gustaria comprar",
    "me gustaría pedir",
    "me gustaria pedir",
];

pub const PALABRAS_ESTADO_PEDIDO: &[&str] = &[
    "consultar estado",
    "estado de mi pedido",
    "seguimiento de pedido",
    "mi pedido",
    "donde está mi pedido",
    "donde esta mi pedido",
    "cuando llega mi pedido",
    "cuándo llega mi pedido",
    "tracking de mi pedido",
    "rastreo de pedido",
    "revisar pedido",
    "cómo va mi pedido",
    "como va mi pedido",
    "estado de mi compra",
    "estado de mi orden",
];

pub const PALABRAS_OFERTAS_ESPECIALES: &[&str] = &[
    "ofertas",
    "promociones",
    "descuentos",
    "ofertas especiales",
    "promociones especiales",
    "promo",
    "combos especiales",
    "paquetes con descuento",
    "liquidación",
    "liquidacion",
    "ofertas del día",
    "ofertas del dia",
    "promociones del día",
    "promociones del dia",
    "hay descuentos",
    "tienen ofertas",
];

pub const PALABRAS_ATENCION_CLIENTE: &[&str] = &[
    "atención al cliente",
    "atencion al cliente",
    "servicio al cliente",
    "hablar con alguien",
    "hablar con una persona",
    "hablar con un representante",
    "necesito ayuda",
    "tengo un problema",
    "tengo una duda",
    "tengo una pregunta",
    "quiero hablar con un humano",
    "quiero hablar con una persona",
    "contactar con soporte",
    "contactar con atención",
];

/// Neighborhoods covered by home delivery, lower-case.
pub const ZONAS_ENTREGA: &[&str] = &[
    "palermo",
    "belgrano",
    "colegiales",
    "caballito",
    "villa urquiza",
    "villa crespo",
    "almagro",
    "recoleta",
    "nuñez",
    "núñez",
    "saavedra",
    "chacarita",
];

// Canned messages
pub const MENSAJE_BIENVENIDA: &str = "¡Hola! En Breaders te solucionamos el almuerzo y la cena 🍽️.\n¿Estás listo/a para hacer tu pedido o tenés alguna consulta?\n\n1️⃣ Ver productos\n2️⃣ Envíos y zonas de entrega\n3️⃣ Conservación y preparación\n4️⃣ Recetas\n5️⃣ Hablar con atención al cliente";

pub const MENSAJE_MENU_PRINCIPAL: &str = "Menú Principal:\n\n1️⃣ Ver productos\n2️⃣ Envíos y zonas de entrega\n3️⃣ Conservación y preparación\n4️⃣ Recetas\n5️⃣ Hablar con atención al cliente";

pub const MENSAJE_MENU_PRODUCTOS: &str = "Estas son nuestras categorías de productos:\n\n1️⃣ Milanesas clásicas\n2️⃣ Medallones\n3️⃣ Milanesas rellenas\n4️⃣ Línea veggie\n\nRespondé con el número de la categoría para ver los productos.\nEscribí 'volver' para regresar al menú principal.";

pub const MENSAJE_PRODUCTOS_MILANESAS: &str = "🥖 *MILANESAS CLÁSICAS*\n\n1. Milanesas de carne - $4200/kg\n2. Milanesas de pollo - $3800/kg\n3. Milanesas de cerdo - $3900/kg\n\nPara hacer un pedido escribí 'quiero pedir' y te ayudamos.\nEscribí 'volver' para regresar a las categorías.";

pub const MENSAJE_PRODUCTOS_MEDALLONES: &str = "🥩 *MEDALLONES*\n\n1. Medallones de carne - $3600/kg\n2. Medallones de pollo - $3400/kg\n3. Medallones de espinaca - $3200/kg\n\nPara hacer un pedido escribí 'quiero pedir' y te ayudamos.\nEscribí 'volver' para regresar a las categorías.";

pub const MENSAJE_PRODUCTOS_RELLENOS: &str = "🧀 *MILANESAS RELLENAS*\n\n1. Milanesa napolitana lista - $4800/kg\n2. Milanesa rellena jamón y queso - $5000/kg\n3. Milanesa caprese - $4900/kg\n\nPara hacer un pedido escribí 'quiero pedir' y te ayudamos.\nEscribí 'volver' para regresar a las categorías.";

pub const MENSAJE_PRODUCTOS_VEGGIE: &str = "🥦 *LÍNEA VEGGIE*\n\n1. Milanesas de soja - $2900/kg\n2. Milanesas de lentejas - $3100/kg\n3. Medallones de garbanzo - $3000/kg\n\nPara hacer un pedido escribí 'quiero pedir' y te ayudamos.\nEscribí 'volver' para regresar a las categorías.";

pub const MENSAJE_MENU_ENVIOS: &str = "Envíos y zonas de entrega 🛵:\n\n1️⃣ Consultar si llegamos a tu barrio\n2️⃣ Costos y tiempos de envío\n3️⃣ Horarios de entrega\n\nEscribí 'volver' para regresar al menú principal.";

pub const MENSAJE_ENVIOS_ZONA: &str = "Decime el nombre de tu barrio y te confirmo si hacemos entregas ahí. 📍";

pub const MENSAJE_ZONA_CUBIERTA: &str = "¡Buenas noticias! 🎉 Llegamos a tu barrio. El envío demora entre 30 y 45 minutos según la zona.";

pub const MENSAJE_ZONA_NO_CUBIERTA: &str = "Por el momento no llegamos a esa zona 😔. Podés retirar tu pedido por nuestro local de Palermo, de lunes a sábado.";

pub const MENSAJE_ENVIOS_COSTOS: &str = "Costos y tiempos de envío:\n\n💰 Costo estándar: $500\n🆓 Envío gratis en pedidos mayores a $5000\n⏱️ Tiempo estimado: 30 a 45 minutos según la zona\n\nEscribí 'volver' para regresar al menú de envíos.";

pub const MENSAJE_ENVIOS_HORARIOS: &str = "Horarios de entrega:\n\n📅 Lunes a viernes: 9:00 a 20:00 hs\n📅 Sábados: 9:00 a 14:00 hs\n📅 Domingos: cerrado\n\nLos pedidos fuera de horario se procesan el siguiente día hábil.\nEscribí 'volver' para regresar al menú de envíos.";

pub const MENSAJE_MENU_MANIPULACION: &str = "Conservación y preparación ❄️🔥:\n\n1️⃣ Cómo conservar los productos\n2️⃣ Cómo cocinarlos\n3️⃣ Cómo descongelarlos\n\nEscribí 'volver' para regresar al menú principal.";

pub const MENSAJE_MANIPULACION_CONSERVACION: &str = "Conservación ❄️:\n\nNuestros productos llegan congelados. Guardalos en el freezer apenas los recibas: duran hasta 6 meses a -18°C. Una vez descongelados, consumilos dentro de las 24 horas y no los vuelvas a congelar.\n\nEscribí 'volver' para regresar.";

pub const MENSAJE_MANIPULACION_COCCION: &str = "Cocción 🔥:\n\n🍳 Sartén: fuego medio, 4 a 5 minutos por lado.\n♨️ Horno: 200°C, 20 minutos, dando vuelta a mitad de cocción.\n🌀 Freidora de aire: 190°C, 12 a 15 minutos.\n\nNo hace falta descongelar antes de cocinar.\n\nEscribí 'volver' para regresar.";

pub const MENSAJE_MANIPULACION_DESCONGELADO: &str = "Descongelado 🧊:\n\nPasá los productos del freezer a la heladera la noche anterior. Evitá descongelar a temperatura ambiente o en microondas: se pierde el rebozado crocante.\n\nEscribí 'volver' para regresar.";

pub const MENSAJE_MENU_RECETAS: &str = "Recetas con nuestros productos 👨‍🍳:\n\n1️⃣ Milanesa a la napolitana\n2️⃣ Sándwich de milanesa completo\n3️⃣ Milanesas al horno con guarnición\n\nEscribí 'volver' para regresar al menú principal.";

pub const MENSAJE_RECETA_NAPOLITANA: &str = "🍅 *MILANESA A LA NAPOLITANA*\n\n1. Cociná la milanesa como siempre.\n2. Cubrila con salsa de tomate, jamón y queso.\n3. Gratiná al horno 5 minutos hasta que funda el queso.\n4. Terminá con orégano por arriba.\n\nEscribí 'volver' para ver más recetas.";

pub const MENSAJE_RECETA_SANDWICH: &str = "🥪 *SÁNDWICH DE MILANESA COMPLETO*\n\n1. Cociná la milanesa bien crocante.\n2. Tostá un pan francés con manteca.\n3. Armalo con lechuga, tomate, jamón, queso y huevo frito.\n\nEscribí 'volver' para ver más recetas.";

pub const MENSAJE_RECETA_HORNO: &str = "♨️ *MILANESAS AL HORNO CON GUARNICIÓN*\n\n1. Poné las milanesas en una placa apenas aceitada.\n2. Acomodá papas en gajos alrededor.\n3. Horno a 200°C durante 25 minutos, girando a mitad de cocción.\n\nEscribí 'volver' para ver más recetas.";

pub const MENSAJE_MENU_ATENCION: &str = "Estás en el área de atención al cliente. Por favor, describí tu consulta o problema y te ayudaremos lo antes posible.\n\nEscribí 'volver' para regresar al menú principal.";

pub const MENSAJE_HACER_PEDIDO: &str = "¡Genial! Para hacer un pedido decime qué productos querés y la cantidad en kilos. Un asesor te confirma el total y la entrega.\n\nSi querés ver primero el catálogo, escribí 'productos'.";

pub const MENSAJE_CONSULTAR_ESTADO: &str = "Para consultar el estado de tu pedido necesito el número de pedido. Por favor, envíame el número que recibiste en tu confirmación.";

pub const MENSAJE_OPCION_NO_DISPONIBLE: &str = "Esa opción no está disponible en este menú. Elegí una de las opciones numeradas o escribí 'volver' para regresar.";

pub const MENSAJE_NO_ENTIENDO: &str = "Lo siento, no entendí tu mensaje. ¿Podrías reformularlo o elegir una opción del menú?\n\nMenú Principal:\n\n1️⃣ Ver productos\n2️⃣ Envíos y zonas de entrega\n3️⃣ Conservación y preparación\n4️⃣ Recetas\n5️⃣ Hablar con atención al cliente";

pub const MENSAJE_ERROR: &str = "Lo siento, ocurrió un error al procesar tu solicitud. Por favor, intenta nuevamente más tarde.";
