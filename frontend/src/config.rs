
#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("http://localhost:54321")  // supabase start default
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")  // Same origin, proxied
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}

pub const WAITLIST_TABLE: &str = "waitlist_users";
pub const CONTACT_TABLE: &str = "contactUs";

/// Height of the fixed nav bar, subtracted from section offsets.
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_STAGGER_MS: usize = 100;

pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

pub const THEME_STORAGE_KEY: &str = "theme";
