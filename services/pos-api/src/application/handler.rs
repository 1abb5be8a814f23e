//! 业务处理器

use std::collections::HashMap;
use std::sync::Arc;

use metrics::counter;
use pos_errors::{AppError, AppResult};
use tracing::{debug, info, warn};

use crate::domain::entities::{
    Customer, Employee, HourlySales, InventoryItem, ItemSales, MenuFlag, MenuItem, MenuItemInfo,
    MenuItemName, MenuItemSummary, NewOrder, Order, OrderItem, OrderMenuItem, OrderStatusView,
    PendingOrder, ProductUsage, Promo,
};
use crate::domain::enums::{ItemSize, MenuCategory, OrderStatus};
use crate::domain::loyalty::{LoyaltyOutcome, POINTS_PER_ORDER};
use crate::domain::repositories::{
    CustomerRepository, EmployeeRepository, InventoryRepository, MenuRepository, OrderRepository,
    ReportRepository,
};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};

use super::commands::*;
use super::queries::*;
use super::results::*;

/// 处理器依赖的仓储集合
#[derive(Clone)]
pub struct Repositories {
    pub menu: Arc<dyn MenuRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub inventory: Arc<dyn InventoryRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub uow_factory: Arc<dyn UnitOfWorkFactory>,
}

pub struct ServiceHandler {
    menu_repo: Arc<dyn MenuRepository>,
    order_repo: Arc<dyn OrderRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    inventory_repo: Arc<dyn InventoryRepository>,
    report_repo: Arc<dyn ReportRepository>,
    uow_factory: Arc<dyn UnitOfWorkFactory>,
}

impl ServiceHandler {
    pub fn new(repos: Repositories) -> Self {
        Self {
            menu_repo: repos.menu,
            order_repo: repos.orders,
            employee_repo: repos.employees,
            customer_repo: repos.customers,
            inventory_repo: repos.inventory,
            report_repo: repos.reports,
            uow_factory: repos.uow_factory,
        }
    }

    // ========== 菜单 ==========

    pub async fn get_menu_item(&self, id: i32) -> AppResult<MenuItem> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// 不带分类时返回在售菜单（主菜、配菜、其他）
    pub async fn list_menu(&self, query: MenuListQuery) -> AppResult<Vec<MenuItemSummary>> {
        match query.category() {
            Some(category) => {
                let items = self.menu_repo.list_by_category(&category).await?;
                if items.is_empty() {
                    debug!(category = %category, "No menu items for category");
                }
                Ok(items)
            }
            None => {
                let mut items = self.menu_repo.list_active().await?;
                items.sort_by_key(|item| MenuCategory::menu_rank(&item.menu_item_type));
                Ok(items)
            }
        }
    }

    pub async fn flagged_menu_names(&self, flag: MenuFlag) -> AppResult<Vec<MenuItemName>> {
        self.menu_repo.names_with_flag(flag).await
    }

    pub async fn menu_info(&self, name: Option<&str>) -> AppResult<Vec<MenuItemInfo>> {
        self.menu_repo.menu_info(name).await
    }

    /// 按名称和规格查询价格
    pub async fn price_of(&self, item: &str, size: &str) -> AppResult<PriceQuote> {
        let prices = self
            .menu_repo
            .find_prices_by_name(item)
            .await?
            .ok_or_else(|| AppError::not_found("Price not found"))?;
        let price = prices
            .price_for(size.parse::<ItemSize>()?)
            .ok_or_else(|| AppError::not_found("Price not found"))?;

        Ok(PriceQuote {
            item: item.to_string(),
            size: size.to_string(),
            price: format!("{:.2}", price),
        })
    }

    pub async fn menu_item_id_by_name(&self, name: &str) -> AppResult<i32> {
        self.menu_repo
            .find_id_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Menu item not found"))
    }

    pub async fn add_menu_item(&self, cmd: AddMenuItemCommand) -> AppResult<i32> {
        let item = cmd.into_new_menu_item()?;
        let id = self.menu_repo.insert(&item).await?;
        info!(menu_item_id = id, name = %item.name, category = item.category.as_str(), "Menu item added");
        Ok(id)
    }

    /// 下架（软删除）
    pub async fn remove_menu_item(&self, cmd: RemoveMenuItemCommand) -> AppResult<()> {
        let name = required_text(cmd.name, "name")?;
        if !self.menu_repo.deactivate_by_name(&name).await? {
            return Err(AppError::not_found("Menu item not found"));
        }
        info!(name = %name, "Menu item deactivated");
        Ok(())
    }

    pub async fn set_calories(&self, cmd: SetCaloriesCommand) -> AppResult<MenuItem> {
        let (id, calories) = cmd.validate()?;
        self.menu_repo
            .update_calories(id, calories)
            .await?
            .ok_or_else(|| AppError::not_found("Menu item not found"))
    }

    pub async fn promos(&self) -> AppResult<Vec<Promo>> {
        self.menu_repo.active_promos().await
    }

    // ========== 员工 ==========

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.employee_repo.list().await
    }

    pub async fn list_unlinked_employees(&self) -> AppResult<Vec<Employee>> {
        self.employee_repo.list_unlinked().await
    }

    pub async fn add_employee(&self, cmd: AddEmployeeCommand) -> AppResult<i32> {
        let employee = cmd.into_new_employee()?;
        let id = self.employee_repo.insert(&employee).await?;
        info!(employee_id = id, job_title = %employee.job_title, "Employee added");
        Ok(id)
    }

    pub async fn remove_employee(&self, id: i32) -> AppResult<()> {
        if !self.employee_repo.delete(id).await? {
            return Err(AppError::not_found("Employee not found."));
        }
        info!(employee_id = id, "Employee removed");
        Ok(())
    }

    pub async fn set_wage(&self, cmd: SetWageCommand) -> AppResult<Employee> {
        let (id, wage) = cmd.validate()?;
        self.employee_repo
            .update_wage(id, wage)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))
    }

    pub async fn link_google(&self, cmd: LinkGoogleCommand) -> AppResult<Employee> {
        let (employee_id, google_id) = cmd.validate()?;
        let employee = self
            .employee_repo
            .link_google(employee_id, &google_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;
        info!(employee_id, "Google account linked");
        Ok(employee)
    }

    pub async fn employee_by_google_id(&self, google_id: &str) -> AppResult<Employee> {
        self.employee_repo
            .find_by_google_id(google_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// 登录占位：邮箱与员工号匹配即通过
    pub async fn login(&self, cmd: LoginCommand) -> AppResult<Employee> {
        let (email, id) = cmd.credentials()?;
        self.employee_repo
            .find_by_credentials(&email, id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))
    }

    // ========== 订单 ==========

    /// 下单：订单头、订单行和库存扣减在同一事务中完成
    pub async fn place_order(&self, cmd: PlaceOrderCommand) -> AppResult<PlacedOrder> {
        let order = cmd.into_new_order()?;
        info!(
            employee_id = ?order.employee_id,
            lines = order.lines.len(),
            total = %order.total,
            "Placing order"
        );

        let mut uow = self.uow_factory.begin().await?;
        match write_order(uow.as_mut(), &order).await {
            Ok(placed) => {
                uow.commit().await?;
                counter!("pos_orders_placed_total").increment(1);
                counter!("pos_order_lines_total").increment(placed.lines as u64);
                counter!("pos_inventory_decrements_total").increment(placed.decrements);
                info!(
                    order_id = placed.order_id,
                    decrements = placed.decrements,
                    "Order placed"
                );
                Ok(placed)
            }
            Err(e) => {
                rollback(uow).await;
                warn!(error = %e, "Order placement rolled back");
                Err(e)
            }
        }
    }

    pub async fn pending_orders(&self) -> AppResult<Vec<PendingOrder>> {
        self.order_repo.list_pending().await
    }

    /// 更新订单状态：只能前进，相同状态视为成功
    pub async fn update_order_status(&self, cmd: UpdateOrderStatusCommand) -> AppResult<Order> {
        let current = self
            .order_repo
            .find_by_id(cmd.order_id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

        if current.order_status == cmd.new_status {
            debug!(order_id = cmd.order_id, status = %cmd.new_status, "Order already in status");
            return Ok(current);
        }
        if !current.order_status.can_transition_to(cmd.new_status) {
            return Err(AppError::validation(format!(
                "Cannot move order {} from {} to {}",
                cmd.order_id, current.order_status, cmd.new_status
            )));
        }

        // 写入时再校验来源状态，并发请求不会让订单倒退
        let Some(updated) = self
            .order_repo
            .update_status(cmd.order_id, cmd.new_status, &cmd.new_status.sources())
            .await?
        else {
            let latest = self
                .order_repo
                .find_by_id(cmd.order_id)
                .await?
                .ok_or_else(|| AppError::not_found("Order not found"))?;
            if latest.order_status == cmd.new_status {
                debug!(order_id = cmd.order_id, status = %cmd.new_status, "Order already in status");
                return Ok(latest);
            }
            warn!(
                order_id = cmd.order_id,
                current = %latest.order_status,
                requested = %cmd.new_status,
                "Order status changed concurrently"
            );
            return Err(AppError::validation(format!(
                "Cannot move order {} from {} to {}",
                cmd.order_id, latest.order_status, cmd.new_status
            )));
        };
        info!(
            order_id = cmd.order_id,
            from = %current.order_status,
            to = %updated.order_status,
            "Order status updated"
        );
        Ok(updated)
    }

    pub async fn complete_order(&self, order_id: i32) -> AppResult<Order> {
        self.update_order_status(UpdateOrderStatusCommand {
            order_id,
            new_status: OrderStatus::Completed,
        })
        .await
    }

    pub async fn order_statuses(&self) -> AppResult<Vec<OrderStatusView>> {
        self.order_repo.list_statuses().await
    }

    pub async fn order_menu_items(&self, order_id: i32) -> AppResult<Vec<OrderMenuItem>> {
        let items = self.order_repo.menu_items_of_order(order_id).await?;
        if items.is_empty() {
            return Err(AppError::not_found(format!(
                "No menu items found for order {}",
                order_id
            )));
        }
        Ok(items)
    }

    pub async fn delete_order_item(&self, cmd: DeleteOrderItemCommand) -> AppResult<OrderItem> {
        let (order_id, menu_item_id) = cmd.validate()?;
        let deleted = self
            .order_repo
            .delete_order_item(order_id, menu_item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Order item not found"))?;
        info!(order_id, menu_item_id, "Order item deleted");
        Ok(deleted)
    }

    // ========== 报表 ==========

    /// Z 报表：当日已完成订单及合计
    pub async fn daily_report(&self, query: ReportDateQuery) -> AppResult<DailyReport> {
        let date = query.date()?;
        let orders = self.report_repo.completed_orders_on(date).await?;
        let total = orders.iter().map(|o| o.price).sum();
        Ok(DailyReport { orders, total })
    }

    /// X 报表：当日按小时销售额
    pub async fn hourly_report(&self, query: ReportDateQuery) -> AppResult<Vec<HourlySales>> {
        let date = query.date()?;
        self.report_repo.hourly_sales(date).await
    }

    pub async fn sales_report(&self, query: ReportRangeQuery) -> AppResult<Vec<ItemSales>> {
        let range = query.range()?;
        let mut rows = self.report_repo.sales_by_item(range).await?;
        rows.sort_by_key(|row| MenuCategory::report_rank(&row.category));
        Ok(rows)
    }

    pub async fn product_usage(&self, query: ReportRangeQuery) -> AppResult<Vec<ProductUsage>> {
        let range = query.range()?;
        self.report_repo.product_usage(range).await
    }

    pub async fn restock_report(&self) -> AppResult<Vec<RestockLine>> {
        let levels = self.report_repo.inventory_levels().await?;
        Ok(levels
            .into_iter()
            .map(|level| RestockLine {
                min_required_quantity: level.min_required_quantity(),
                quantity: level.quantity,
                name: level.name,
            })
            .collect())
    }

    /// 补货：库存不高于满库存 10% 的项目补满
    pub async fn restock(&self) -> AppResult<u64> {
        let updated = self.inventory_repo.restock_below_threshold().await?;
        info!(updated, "Inventory restocked");
        Ok(updated)
    }

    // ========== 库存 ==========

    pub async fn update_unit_cost(&self, cmd: UpdateUnitCostCommand) -> AppResult<InventoryItem> {
        let (id, cost) = cmd.validate()?;
        self.inventory_repo
            .update_unit_cost(id, cost)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory item not found."))
    }

    pub async fn delete_inventory_item(&self, cmd: DeleteInventoryItemCommand) -> AppResult<()> {
        let name = required_text(cmd.name, "name")?;
        if !self.inventory_repo.delete_by_name(&name).await? {
            return Err(AppError::not_found("Item not found."));
        }
        info!(name = %name, "Inventory item deleted");
        Ok(())
    }

    // ========== 会员 ==========

    /// 结账：有邮箱的顾客积分，满 25 分打九折
    pub async fn cashout(&self, cmd: CashoutCommand) -> AppResult<CashoutResult> {
        let total = cmd.total()?;

        let outcome = match cmd.member_email() {
            None => LoyaltyOutcome::anonymous(),
            Some(email) => {
                let mut uow = self.uow_factory.begin().await?;
                match settle_points(uow.as_mut(), &cmd, email).await {
                    Ok(outcome) => {
                        uow.commit().await?;
                        outcome
                    }
                    Err(e) => {
                        rollback(uow).await;
                        return Err(e);
                    }
                }
            }
        };

        Ok(CashoutResult {
            final_price: outcome.final_price(total),
            discount_applied: outcome.discount_applied,
            remaining_points: outcome.points,
        })
    }

    pub async fn add_customer(&self, cmd: AddCustomerCommand) -> AppResult<Customer> {
        let customer = cmd.into_new_customer()?;
        if self
            .customer_repo
            .find_by_email(&customer.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Customer already exists"));
        }
        let created = self.customer_repo.insert(&customer, POINTS_PER_ORDER).await?;
        info!(customer_id = created.customer_id, "Customer added");
        Ok(created)
    }

    pub async fn customer_by_email(&self, email: &str) -> AppResult<Customer> {
        self.customer_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Customer not found"))
    }
}

/// 写入订单头、订单行，再按订单行逐条扣减配方库存
async fn write_order(uow: &mut dyn UnitOfWork, order: &NewOrder) -> AppResult<PlacedOrder> {
    let order_id = uow.insert_order(order).await?;
    for line in &order.lines {
        uow.insert_order_item(order_id, line).await?;
    }

    let mut recipes: HashMap<i32, Vec<i32>> = HashMap::new();
    let mut decrements = 0u64;
    for line in &order.lines {
        let ingredients = match recipes.get(&line.menu_item_id) {
            Some(ids) => ids.clone(),
            None => {
                let ids = uow.ingredients_of(line.menu_item_id).await?;
                recipes.insert(line.menu_item_id, ids.clone());
                ids
            }
        };

        if ingredients.is_empty() {
            warn!(
                order_id,
                menu_item_id = line.menu_item_id,
                "No ingredients mapped, skipping inventory update"
            );
            continue;
        }

        for inventory_id in ingredients {
            if uow.decrement_inventory(inventory_id).await? {
                decrements += 1;
            } else {
                warn!(order_id, inventory_id, "Inventory item not found, skipping");
            }
        }
    }

    Ok(PlacedOrder {
        order_id,
        lines: order.lines.len(),
        decrements,
    })
}

/// 锁定会员行后积分/兑换；新邮箱直接建档
async fn settle_points(
    uow: &mut dyn UnitOfWork,
    cmd: &CashoutCommand,
    email: String,
) -> AppResult<LoyaltyOutcome> {
    if let Some(customer) = uow.find_customer_for_update(&email).await? {
        return accrue_points(uow, customer).await;
    }

    let new_customer = cmd.new_customer(email.clone())?;
    if let Some(created) = uow
        .insert_customer_if_absent(&new_customer, POINTS_PER_ORDER)
        .await?
    {
        info!(customer_id = created.customer_id, "Customer enrolled at cash-out");
        return Ok(LoyaltyOutcome::new_member());
    }

    // 同一邮箱被并发结账抢先创建，改为给该会员积分
    debug!("Customer enrolled concurrently, accruing instead");
    let customer = uow
        .find_customer_for_update(&email)
        .await?
        .ok_or_else(|| AppError::internal("Customer vanished during cash-out"))?;
    accrue_points(uow, customer).await
}

async fn accrue_points(uow: &mut dyn UnitOfWork, customer: Customer) -> AppResult<LoyaltyOutcome> {
    let outcome = LoyaltyOutcome::accrue(customer.points);
    uow.update_customer_points(customer.customer_id, outcome.points)
        .await?;
    info!(
        customer_id = customer.customer_id,
        points = outcome.points,
        discount_applied = outcome.discount_applied,
        "Loyalty points updated"
    );
    Ok(outcome)
}

async fn rollback(uow: Box<dyn UnitOfWork>) {
    if let Err(e) = uow.rollback().await {
        warn!(error = %e, "Rollback failed");
    }
}
