pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod time_basis;
        pub mod timezone_context;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod aggregator;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod edit_time_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod session {
                    pub mod events;
                    pub mod evolve;
                    pub mod state;
                }
            }
        }
    }
    pub mod schedules {
        pub mod core {
            pub mod arrival;
            pub mod schedule_block;
            pub mod schedule_index;
        }
    }
    pub mod reports {
        pub mod core {
            pub mod daily_summary;
            pub mod weekly_summary;
        }
        pub mod use_cases {
            pub mod report_query;
            pub mod build_daily_report {
                pub mod handler;
            }
            pub mod build_weekly_report {
                pub mod handler;
            }
            pub mod build_team_weekly_report {
                pub mod handler;
            }
        }
    }
}

pub mod shell;
