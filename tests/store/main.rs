mod common;
mod crud;
mod pagination;
