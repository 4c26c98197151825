pub mod application {
    pub mod group {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_key;
        pub mod get_public;
        pub mod update;
    }
    pub mod message {
        pub mod get_by_group;
        pub mod send;
    }
    pub mod user {
        pub mod add_group;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_key;
        pub mod get_groups;
        pub mod save;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod group {
        pub mod builder;
        pub mod changes;
        pub mod date_time;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_key;
            pub mod get_public;
            pub mod update;
        }
    }
    pub mod message {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_group;
            pub mod send;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_group;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_key;
            pub mod get_groups;
            pub mod save;
            pub mod update;
        }
    }
}
