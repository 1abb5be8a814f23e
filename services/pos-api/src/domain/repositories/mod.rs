//! 仓储接口

mod customer_repository;
mod employee_repository;
mod inventory_repository;
mod menu_repository;
mod order_repository;
mod report_repository;

pub use customer_repository::CustomerRepository;
pub use employee_repository::EmployeeRepository;
pub use inventory_repository::InventoryRepository;
pub use menu_repository::MenuRepository;
pub use order_repository::OrderRepository;
pub use report_repository::ReportRepository;
