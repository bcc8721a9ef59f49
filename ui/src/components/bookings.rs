//! Bookings of one room, with delete links and the new booking form

use leptos::prelude::*;
use leptos::web_sys;
use tellus_mason::form::FormModel;
use tellus_mason::reservation::BookingList;
use tellus_mason::ApiConfig;

use super::schema_form::{missing_fields_message, SchemaForm};
use crate::api;

fn alert(message: &str) {
    web_sys::window().and_then(|w| w.alert_with_message(message).ok());
}

#[component]
pub fn RoomBookings(room: String, href: String) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::same_origin);
    let (refresh_trigger, set_refresh_trigger) = signal(0u32);

    let bookings = {
        let config = config.clone();
        let href = href.clone();
        LocalResource::new(move || {
            let _ = refresh_trigger.get();
            let config = config.clone();
            let href = href.clone();
            async move { api::get_room_bookings(&config, &href).await }
        })
    };

    let on_delete = Callback::new({
        let config = config.clone();
        move |delete_href: String| {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_booking(&config, &delete_href).await {
                    Ok(_) => {
                        alert("The booking has been deleted from the database");
                        set_refresh_trigger.update(|n| *n += 1);
                    }
                    Err(e) => alert(&format!("The booking could not be deleted: {}", e)),
                }
            });
        }
    });

    let on_added = Callback::new(move |_: ()| {
        set_refresh_trigger.update(|n| *n += 1);
    });
    let heading = format!("Bookings of {}", room);

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold mb-4">{heading}</h3>
            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading bookings..."</div> }>
                {move || {
                    bookings.get().map(|result| match result {
                        Ok(list) => view! {
                            <BookingTable list=list.clone() on_delete=on_delete/>
                            <NewBookingForm list=list on_added=on_added/>
                        }.into_any(),
                        Err(e) => view! {
                            <div class="text-red-600">
                                {format!("Cannot extract information about room '{}': {}", room, e)}
                            </div>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn BookingTable(list: BookingList, on_delete: Callback<String>) -> impl IntoView {
    if list.bookings.is_empty() {
        return view! { <p class="text-sm text-gray-500 mb-4">"No bookings yet"</p> }.into_any();
    }

    view! {
        <ul class="divide-y divide-gray-200 mb-6">
            {list.bookings.into_iter().map(|booking| {
                let delete = booking.delete.clone();
                view! {
                    <li class="py-2 flex justify-between items-center">
                        <span class="text-sm text-gray-900">{booking.summary()}</span>
                        {delete.map(|control| {
                            let title = control.title_or("Delete").to_string();
                            let href = control.href.clone();
                            view! {
                                <button
                                    class="text-sm text-red-600 hover:text-red-900"
                                    on:click=move |_| on_delete.run(href.clone())
                                >
                                    {title}
                                </button>
                            }
                        })}
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }.into_any()
}

#[component]
fn NewBookingForm(list: BookingList, on_added: Callback<()>) -> impl IntoView {
    let (Some(control), Some(initial)) = (list.add_booking.clone(), list.new_booking_form()) else {
        return view! { <span></span> }.into_any();
    };
    let title = control.title_or("Add booking").to_string();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::same_origin);
    let form = RwSignal::new(initial);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current: FormModel = form.get_untracked();
        if let Some(message) = missing_fields_message(&current) {
            alert(&message);
            return;
        }

        let config = config.clone();
        let control = control.clone();
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit(&config, &control, &current).await {
                Ok(_) => {
                    alert("Booking successfully added");
                    form.update(|f| f.clear_values());
                    on_added.run(());
                }
                Err(e) => alert(&format!("Could not create new booking: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="border-t border-gray-100 pt-4">
            <h4 class="text-md font-semibold mb-3">{title}</h4>
            <SchemaForm form=form/>
            <button
                type="submit"
                class="mt-4 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                disabled=move || saving.get()
            >
                {move || if saving.get() { "Saving..." } else { "Submit" }}
            </button>
        </form>
    }.into_any()
}
