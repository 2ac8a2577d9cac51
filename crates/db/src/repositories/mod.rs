pub mod ui_language_repo;
