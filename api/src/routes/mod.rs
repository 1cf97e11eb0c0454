pub mod hackrx;
