pub mod pdf_server;
