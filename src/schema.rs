diesel::table! {
    rangos (id) {
        id -> Integer,
        nome -> Text,
    }
}

diesel::table! {
    ingredientes (id) {
        id -> Integer,
        nome -> Text,
        rango_id -> Integer,
    }
}

diesel::joinable!(ingredientes -> rangos (rango_id));

diesel::allow_tables_to_appear_in_same_query!(rangos, ingredientes);
