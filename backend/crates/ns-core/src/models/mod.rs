pub mod admin_record;
pub mod desk;
pub mod desk_status;
pub mod principal;
pub mod role;
pub mod tenant;
