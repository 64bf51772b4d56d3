pub mod flash;
pub mod logout;
pub mod open_session;
pub mod select_room;
pub mod submit_booking;

#[cfg(test)]
pub(crate) mod test_support;
