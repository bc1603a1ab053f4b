// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each handler authorizes the actor, converts the request into domain
//! values, calls persistence, and converts the result into a response
//! DTO. Handlers never hold state between calls.

use std::str::FromStr;

use storefront::{CartSnapshot, CartSnapshotLine, OrderRequest, ProductPatch};
use storefront_domain::{
    Category, ColorVariant, Decimal, DomainError, Money, NewProduct, Order, OrderFilter,
    OrderItem, OrderStatus, Page, PaymentMethod, Product, ProductFilter, ProductImage,
    resolve_variant_image, validate_stock,
};
use storefront_persistence::{CartItemInput, CustomerData, Persistence};
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AddCartItemRequest, CartItemInfo, CartResponse, CategoryInfo, ColorInfo, ColorInput,
    CreateCategoryRequest, CreateProductRequest, CustomerInfo, ImageInfo, ImageInput,
    ListOrdersRequest, ListProductsRequest, OrderItemResponse, OrderListResponse, OrderResponse,
    PlaceOrderRequest, ProductInfo, ProductListResponse, ProductRefInfo,
    RegisterCustomerRequest, RegisterCustomerResponse, ShippingResponse,
    UpdateOrderStatusRequest, UpdateProductRequest,
};

// ============================================================================
// Customers
// ============================================================================

/// Registers a customer and issues their API token.
///
/// # Errors
///
/// Returns an error if the email or display name is invalid or the email is
/// already registered.
pub fn register_customer(
    persistence: &mut Persistence,
    request: &RegisterCustomerRequest,
) -> Result<RegisterCustomerResponse, ApiError> {
    create_with_role(
        persistence,
        &request.email,
        &request.display_name,
        Role::Customer,
    )
}

/// Creates the first admin if no admin exists yet.
///
/// # Returns
///
/// The admin and its token, or `None` if an admin already exists.
///
/// # Errors
///
/// Returns an error if the email is invalid or the database fails.
pub fn bootstrap_admin(
    persistence: &mut Persistence,
    email: &str,
) -> Result<Option<RegisterCustomerResponse>, ApiError> {
    if persistence.count_customers_with_role(Role::Admin.as_str())? > 0 {
        info!("Admin already exists; skipping bootstrap");
        return Ok(None);
    }

    create_with_role(persistence, email, "Administrator", Role::Admin).map(Some)
}

fn create_with_role(
    persistence: &mut Persistence,
    email: &str,
    display_name: &str,
    role: Role,
) -> Result<RegisterCustomerResponse, ApiError> {
    let token: String = AuthenticationService::generate_token();
    let customer: CustomerData =
        persistence.create_customer(email, display_name, role.as_str(), &token)?;

    info!(
        customer_id = customer.customer_id,
        role = role.as_str(),
        "Registered customer"
    );

    Ok(RegisterCustomerResponse {
        customer: CustomerInfo {
            id: customer.customer_id,
            email: customer.email,
            display_name: customer.display_name,
            role: customer.role,
        },
        token,
    })
}

// ============================================================================
// Catalog
// ============================================================================

/// Lists every category.
///
/// # Errors
///
/// Returns an error if the database fails.
pub fn list_categories(persistence: &mut Persistence) -> Result<Vec<CategoryInfo>, ApiError> {
    Ok(persistence
        .list_categories()?
        .into_iter()
        .map(category_to_info)
        .collect())
}

/// Creates a category.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, a field is invalid, or
/// the slug is taken.
pub fn create_category(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &CreateCategoryRequest,
) -> Result<CategoryInfo, ApiError> {
    AuthorizationService::require_admin(actor, "create_category")?;

    let category: Category = persistence.create_category(&request.name, &request.slug)?;
    Ok(category_to_info(category))
}

/// Lists products matching the request's filter.
///
/// # Errors
///
/// Returns an error if a price bound is invalid or the database fails.
pub fn list_products(
    persistence: &mut Persistence,
    request: ListProductsRequest,
) -> Result<ProductListResponse, ApiError> {
    let filter: ProductFilter = ProductFilter {
        category_id: request.category_id,
        search: request.search,
        min_price: request.min_price.map(parse_money).transpose()?,
        max_price: request.max_price.map(parse_money).transpose()?,
        in_stock_only: request.in_stock_only,
        page: Page::new(request.limit, request.offset),
    };

    let products: Vec<ProductInfo> = persistence
        .list_products(&filter)?
        .into_iter()
        .map(product_to_info)
        .collect();

    Ok(ProductListResponse {
        products,
        limit: filter.page.limit,
        offset: filter.page.offset,
    })
}

/// Retrieves a product by its slug.
///
/// # Errors
///
/// Returns an error if no product has the slug or the database fails.
pub fn get_product_by_slug(
    persistence: &mut Persistence,
    slug: &str,
) -> Result<ProductInfo, ApiError> {
    persistence
        .get_product_by_slug(slug)?
        .map(product_to_info)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Product"),
            message: format!("No product with slug '{slug}'"),
        })
}

/// Creates a product.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, a field is invalid, the
/// category does not exist, or the slug is taken.
pub fn create_product(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateProductRequest,
) -> Result<ProductInfo, ApiError> {
    AuthorizationService::require_admin(actor, "create_product")?;

    let new_product: NewProduct = NewProduct {
        category_id: request.category_id,
        name: request.name,
        slug: request.slug,
        price: parse_money(request.price)?,
        stock: validate_stock(request.stock).map_err(translate_domain_error)?,
        sizes: request.sizes,
        colors: request.colors.into_iter().map(color_from_input).collect(),
        images: request.images.into_iter().map(image_from_input).collect(),
    };

    let product: Product = persistence.create_product(&new_product)?;
    Ok(product_to_info(product))
}

/// Applies a version-guarded edit to a product.
///
/// # Errors
///
/// Returns a conflict if the product changed since the caller read it, or
/// another error if the actor is not an admin, a field is invalid, or the
/// product does not exist.
pub fn update_product(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    product_id: i64,
    request: UpdateProductRequest,
) -> Result<ProductInfo, ApiError> {
    AuthorizationService::require_admin(actor, "update_product")?;

    let patch: ProductPatch = ProductPatch {
        name: request.name,
        slug: request.slug,
        category_id: request.category_id,
        price: request.price.map(parse_money).transpose()?,
        stock: request
            .stock
            .map(validate_stock)
            .transpose()
            .map_err(translate_domain_error)?,
        sizes: request.sizes,
        colors: request
            .colors
            .map(|colors| colors.into_iter().map(color_from_input).collect()),
        images: request
            .images
            .map(|images| images.into_iter().map(image_from_input).collect()),
    };

    let product: Product = persistence
        .update_product(product_id, request.version, patch)
        .map_err(|e| {
            let err: ApiError = ApiError::from(e);
            if err.is_retryable() {
                warn!(product_id, error = %err, "Product edit conflicted");
            }
            err
        })?;

    Ok(product_to_info(product))
}

/// Deletes a product.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the product does not
/// exist.
pub fn delete_product(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    product_id: i64,
) -> Result<(), ApiError> {
    AuthorizationService::require_admin(actor, "delete_product")?;
    persistence.delete_product(product_id)?;
    Ok(())
}

// ============================================================================
// Cart
// ============================================================================

/// Reads the actor's cart.
///
/// # Errors
///
/// Returns an error if the database fails.
pub fn get_cart(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<CartResponse, ApiError> {
    let snapshot: CartSnapshot = persistence.get_cart(actor.customer_id)?;
    cart_to_response(&snapshot)
}

/// Adds a line to the actor's cart and returns the updated cart.
///
/// # Errors
///
/// Returns an error if the product or option is unknown or the quantity is
/// out of range.
pub fn add_cart_item(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: AddCartItemRequest,
) -> Result<CartResponse, ApiError> {
    let input: CartItemInput = CartItemInput {
        product_id: request.product_id,
        quantity: request.quantity,
        size: request.size,
        color_value: request.color,
        color_name: request.color_name,
    };
    persistence.add_to_cart(actor.customer_id, &input)?;
    get_cart(persistence, actor)
}

/// Sets the quantity of a line in the actor's cart.
///
/// # Errors
///
/// Returns an error if the quantity is out of range or the item is not in
/// the actor's cart.
pub fn update_cart_item(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    cart_item_id: i64,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    persistence.update_cart_item_quantity(actor.customer_id, cart_item_id, quantity)?;
    get_cart(persistence, actor)
}

/// Removes a line from the actor's cart.
///
/// # Errors
///
/// Returns an error if the item is not in the actor's cart.
pub fn remove_cart_item(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    cart_item_id: i64,
) -> Result<CartResponse, ApiError> {
    persistence.remove_cart_item(actor.customer_id, cart_item_id)?;
    get_cart(persistence, actor)
}

/// Empties the actor's cart.
///
/// # Errors
///
/// Returns an error if the database fails.
pub fn clear_cart(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<CartResponse, ApiError> {
    persistence.clear_cart(actor.customer_id)?;
    get_cart(persistence, actor)
}

// ============================================================================
// Orders
// ============================================================================

/// Places an order from the actor's cart.
///
/// # Errors
///
/// Returns an error if:
/// - the shipping details, declared total or payment method are invalid
/// - the cart is empty
/// - a line's stock is insufficient (conflict)
pub fn place_order(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: PlaceOrderRequest,
) -> Result<OrderResponse, ApiError> {
    let payment_method: Option<PaymentMethod> = request
        .payment_method
        .as_deref()
        .map(PaymentMethod::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    let order_request: OrderRequest = OrderRequest {
        shipping: request.shipping,
        declared_total: request.total,
        payment_method,
    };

    let order: Order = persistence.place_order(actor.customer_id, &order_request)?;
    Ok(order_to_response(order))
}

/// Lists the actor's own orders, newest first.
///
/// # Errors
///
/// Returns an error if the status filter is invalid or the database fails.
pub fn list_my_orders(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: ListOrdersRequest,
) -> Result<OrderListResponse, ApiError> {
    let filter: OrderFilter = OrderFilter {
        customer_id: Some(actor.customer_id),
        ..order_filter(&request)?
    };
    fetch_orders(persistence, &filter)
}

/// Lists orders across customers, newest first.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the status filter is
/// invalid, or the database fails.
pub fn list_orders(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: ListOrdersRequest,
) -> Result<OrderListResponse, ApiError> {
    AuthorizationService::require_admin(actor, "list_orders")?;
    let filter: OrderFilter = order_filter(&request)?;
    fetch_orders(persistence, &filter)
}

/// Retrieves an order the actor may see.
///
/// Another customer's order is reported as not found.
///
/// # Errors
///
/// Returns an error if the order does not exist or is not visible.
pub fn get_order(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    order_id: i64,
) -> Result<OrderResponse, ApiError> {
    match persistence.get_order(order_id)? {
        Some(order) if AuthorizationService::can_view_order(actor, &order) => {
            Ok(order_to_response(order))
        }
        _ => Err(ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order {order_id} not found"),
        }),
    }
}

/// Moves an order to a new status. Cancelling an active order restocks it.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the status is unknown,
/// the order does not exist, or the transition is not permitted.
pub fn update_order_status(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    order_id: i64,
    request: &UpdateOrderStatusRequest,
) -> Result<OrderResponse, ApiError> {
    AuthorizationService::require_admin(actor, "update_order_status")?;

    let status: OrderStatus =
        OrderStatus::from_str(&request.status).map_err(translate_domain_error)?;
    let order: Order = persistence.set_order_status(order_id, status)?;

    Ok(order_to_response(order))
}

fn order_filter(request: &ListOrdersRequest) -> Result<OrderFilter, ApiError> {
    let status: Option<OrderStatus> = request
        .status
        .as_deref()
        .map(OrderStatus::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    Ok(OrderFilter {
        customer_id: request.customer_id,
        status,
        page: Page::new(request.limit, request.offset),
    })
}

fn fetch_orders(
    persistence: &mut Persistence,
    filter: &OrderFilter,
) -> Result<OrderListResponse, ApiError> {
    let orders: Vec<OrderResponse> = persistence
        .list_orders(filter)?
        .into_iter()
        .map(order_to_response)
        .collect();
    Ok(OrderListResponse { orders })
}

// ============================================================================
// Conversions
// ============================================================================

fn parse_money(amount: Decimal) -> Result<Money, ApiError> {
    Money::new(amount).map_err(|e| translate_domain_error(DomainError::InvalidPrice(e)))
}

fn image_from_input(input: ImageInput) -> ProductImage {
    ProductImage {
        image_id: input.id,
        url: input.url,
    }
}

fn color_from_input(input: ColorInput) -> ColorVariant {
    ColorVariant {
        color_id: input.id,
        name: input.name,
        value: input.value,
        images: input.images.into_iter().map(image_from_input).collect(),
    }
}

fn category_to_info(category: Category) -> CategoryInfo {
    CategoryInfo {
        id: category.category_id,
        name: category.name,
        slug: category.slug,
    }
}

fn image_to_info(image: ProductImage) -> ImageInfo {
    ImageInfo {
        id: image.image_id,
        url: image.url,
    }
}

fn product_to_info(product: Product) -> ProductInfo {
    ProductInfo {
        id: product.product_id,
        category_id: product.category_id,
        name: product.name,
        slug: product.slug,
        price: product.price.amount(),
        stock: product.stock,
        version: product.version,
        sizes: product.sizes,
        colors: product
            .colors
            .into_iter()
            .map(|color| ColorInfo {
                id: color.color_id,
                name: color.name,
                value: color.value,
                images: color.images.into_iter().map(image_to_info).collect(),
            })
            .collect(),
        images: product.images.into_iter().map(image_to_info).collect(),
    }
}

fn cart_line_to_info(line: &CartSnapshotLine) -> Result<CartItemInfo, ApiError> {
    let line_total: Money = line
        .line_total()
        .map_err(|e| translate_domain_error(DomainError::InvalidPrice(e)))?;

    Ok(CartItemInfo {
        id: line.cart_item_id,
        product: ProductRefInfo {
            id: Some(line.product_id),
            name: line.name.clone(),
            slug: line.slug.clone(),
        },
        quantity: line.quantity,
        price: line.unit_price.amount(),
        line_total: line_total.amount(),
        size: line.size.clone(),
        color: line.color_value.clone(),
        color_name: line.color_name.clone(),
        image_url: resolve_variant_image(
            line.color_value.as_deref(),
            line.color_name.as_deref(),
            &line.colors,
            &line.images,
        )
        .to_string(),
        stock: line.stock,
        available: line.is_available(),
    })
}

fn cart_to_response(snapshot: &CartSnapshot) -> Result<CartResponse, ApiError> {
    let subtotal: Money = snapshot
        .subtotal()
        .map_err(|e| translate_domain_error(DomainError::InvalidPrice(e)))?;

    Ok(CartResponse {
        cart_id: snapshot.cart_id,
        items: snapshot
            .lines
            .iter()
            .map(cart_line_to_info)
            .collect::<Result<_, _>>()?,
        item_count: snapshot.item_count(),
        subtotal: subtotal.amount(),
    })
}

fn order_item_to_response(item: OrderItem) -> OrderItemResponse {
    OrderItemResponse {
        id: item.order_item_id,
        quantity: item.quantity,
        price: item.price.amount(),
        size: item.size,
        color: item.color,
        color_name: item.color_name,
        image_url: item.image_url,
        product: ProductRefInfo {
            id: item.product.product_id,
            name: item.product.name,
            slug: item.product.slug,
        },
    }
}

fn order_to_response(order: Order) -> OrderResponse {
    OrderResponse {
        id: order.order_id,
        total: order.total.amount(),
        status: order.status.as_str().to_string(),
        payment_method: order.payment_method.as_str().to_string(),
        created_at: order.created_at,
        shipping: ShippingResponse {
            name: order.shipping.name,
            email: order.shipping.email,
            address: order.shipping.address,
            city: order.shipping.city,
            region: order.shipping.region,
            postal_code: order.shipping.postal_code,
            country: order.shipping.country,
            phone: order.shipping.phone,
        },
        items: order
            .items
            .into_iter()
            .map(order_item_to_response)
            .collect(),
    }
}
