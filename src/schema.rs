// Hand-maintained against the PrestaShop 1.7 schema (read-only subset).

diesel::table! {
    #[sql_name = "ps_orders"]
    orders (id_order) {
        id_order -> Unsigned<Integer>,
        #[max_length = 9]
        reference -> Nullable<Varchar>,
        id_customer -> Unsigned<Integer>,
        id_address_delivery -> Unsigned<Integer>,
        current_state -> Unsigned<Integer>,
        total_paid -> Numeric,
        date_add -> Datetime,
    }
}

diesel::table! {
    #[sql_name = "ps_customer"]
    customer (id_customer) {
        id_customer -> Unsigned<Integer>,
        #[max_length = 255]
        firstname -> Varchar,
        #[max_length = 255]
        lastname -> Varchar,
        #[max_length = 255]
        email -> Varchar,
    }
}

diesel::table! {
    #[sql_name = "ps_address"]
    address (id_address) {
        id_address -> Unsigned<Integer>,
        #[max_length = 128]
        address1 -> Varchar,
        #[max_length = 64]
        city -> Varchar,
        #[max_length = 12]
        postcode -> Nullable<Varchar>,
    }
}

diesel::table! {
    #[sql_name = "ps_order_detail"]
    order_detail (id_order_detail) {
        id_order_detail -> Unsigned<Integer>,
        id_order -> Unsigned<Integer>,
        product_name -> Varchar,
        product_quantity -> Unsigned<Integer>,
        product_price -> Numeric,
        #[max_length = 64]
        product_reference -> Nullable<Varchar>,
    }
}

diesel::table! {
    #[sql_name = "ps_group"]
    customer_group (id_group) {
        id_group -> Unsigned<Integer>,
    }
}

diesel::table! {
    #[sql_name = "ps_group_lang"]
    group_lang (id_group, id_lang) {
        id_group -> Unsigned<Integer>,
        id_lang -> Unsigned<Integer>,
        #[max_length = 32]
        name -> Varchar,
    }
}

diesel::joinable!(orders -> customer (id_customer));
diesel::joinable!(orders -> address (id_address_delivery));
diesel::joinable!(order_detail -> orders (id_order));
diesel::joinable!(group_lang -> customer_group (id_group));

diesel::allow_tables_to_appear_in_same_query!(
    orders,
    customer,
    address,
    order_detail,
    customer_group,
    group_lang,
);
