mod desk;
mod desk_status;
mod principal;
mod role;
