use super::view_model::OrderFormViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::message::MessageBanner;
use crate::shared::format::format_usd;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn OrderForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = OrderFormViewModel::new();
    vm.load_customers();

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="form-page order-form">
            <h2 class="form-page__title">{"Create New Order"}</h2>

            <MessageBanner message=Signal::derive({
                let vm = vm_clone.clone();
                move || vm.message.get()
            }) />

            <form on:submit={
                let vm = vm_clone.clone();
                move |ev| {
                    ev.prevent_default();
                    let on_success: Rc<dyn Fn(())> = Rc::new(move |_| ctx.trigger_refresh());
                    vm.submit_command(on_success);
                }
            }>
                <div class="form-group">
                    <label for="customer_id">{"Select Customer *"}</label>
                    <select
                        id="customer_id"
                        required
                        prop:value={
                            let vm = vm_clone.clone();
                            move || {
                                vm.draft
                                    .get()
                                    .customer_id
                                    .map(|id| id.to_string())
                                    .unwrap_or_default()
                            }
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let raw = event_target_value(&ev);
                                vm.draft.update(|d| d.customer_id = raw.parse().ok());
                            }
                        }
                    >
                        <option value="">{"Choose a customer..."}</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.customers.get().into_iter().map(|customer| {
                                view! {
                                    <option value=customer.id.to_string()>
                                        {format!("{} ({})", customer.name, customer.email)}
                                    </option>
                                }
                            }).collect_view()
                        }
                    </select>
                    {
                        let vm = vm_clone.clone();
                        move || vm.customers.get().is_empty().then(|| view! {
                            <p class="form-warning">
                                {"No customers found. Please add a customer first."}
                            </p>
                        })
                    }
                </div>

                <div class="form-group">
                    <div class="form-group__header">
                        <label>{"Order Items *"}</label>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.draft.update(|d| d.add_item())
                            }
                        >
                            {icon("plus")}
                            {"Add Item"}
                        </button>
                    </div>

                    {
                        let vm = vm_clone.clone();
                        move || {
                            let draft = vm.draft.get();
                            let removable = draft.items.len() > 1;
                            draft.items.into_iter().enumerate().map(|(index, item)| {
                                let vm = vm.clone();
                                view! {
                                    <div class="line-item">
                                        <div class="line-item__header">
                                            <h4>{format!("Item #{}", index + 1)}</h4>
                                            {removable.then(|| view! {
                                                <button
                                                    type="button"
                                                    class="button button--danger"
                                                    on:click={
                                                        let vm = vm.clone();
                                                        move |_| vm.draft.update(|d| d.remove_item(index))
                                                    }
                                                >
                                                    {icon("trash")}
                                                    {"Remove"}
                                                </button>
                                            })}
                                        </div>

                                        <div class="line-item__fields">
                                            <div class="form-field">
                                                <label>{"Item Name *"}</label>
                                                <input
                                                    type="text"
                                                    required
                                                    placeholder="Product name"
                                                    prop:value=item.name.clone()
                                                    on:input={
                                                        let vm = vm.clone();
                                                        move |ev| {
                                                            let raw = event_target_value(&ev);
                                                            vm.draft.update(|d| d.set_item_name(index, &raw));
                                                        }
                                                    }
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label>{"Unit Price ($) *"}</label>
                                                <input
                                                    type="number"
                                                    step="0.01"
                                                    min="0"
                                                    required
                                                    placeholder="0.00"
                                                    prop:value=item.unit_price.text()
                                                    on:input={
                                                        let vm = vm.clone();
                                                        move |ev| {
                                                            let raw = event_target_value(&ev);
                                                            vm.draft.update(|d| d.set_item_price(index, &raw));
                                                        }
                                                    }
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label>{"Quantity *"}</label>
                                                <input
                                                    type="number"
                                                    min="1"
                                                    required
                                                    placeholder="1"
                                                    prop:value=item.quantity.to_string()
                                                    on:input={
                                                        let vm = vm.clone();
                                                        move |ev| {
                                                            let raw = event_target_value(&ev);
                                                            vm.draft.update(|d| d.set_item_quantity(index, &raw));
                                                        }
                                                    }
                                                />
                                            </div>
                                        </div>

                                        {item.subtotal().map(|subtotal| view! {
                                            <div class="line-item__subtotal">
                                                {"Subtotal: "}
                                                <span>{format_usd(subtotal)}</span>
                                            </div>
                                        })}
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                </div>

                <div class="order-total">
                    <span class="order-total__label">{"Order Total:"}</span>
                    <span class="order-total__value">
                        {
                            let vm = vm_clone.clone();
                            move || format_usd(vm.draft.get().total())
                        }
                    </span>
                </div>

                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.can_submit()()
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.submitting.get() {
                                "Creating Order..."
                            } else {
                                "Create Order"
                            }
                        }
                    }
                </button>
            </form>
        </div>
    }
}
