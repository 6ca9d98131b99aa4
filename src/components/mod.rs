pub mod balance_page;
pub mod faq_list;
pub mod home_page;
pub mod nav_bar;
pub mod offers_list;
pub mod review_form;
pub mod reviews_list;
pub mod reviews_page;
pub mod toast;
pub mod transactions_list;
pub mod withdraw_modal;
